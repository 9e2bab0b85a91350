//! Reference data for decoder and projection tests.

/// Reference headers as distributed by DWD, including the ETX terminator.
pub mod headers {
    /// PG picture product: run-length encoded, packed dimensions, 6 levels.
    pub const PG: &str = "PG262115100000616BY22205LV 6  1.0 19.0 28.0 37.0 46.0 55.0CS0MX 0MS \
        88<boo,ros,emd,hnr,umd,pro,ess,fld,drs,neu,nhb,oft,eis,tur,isn,fbg,mem> \
        are used, BG460460\x03";

    /// Header length of [`PG`] in bytes.
    pub const PG_LENGTH: usize = 159;

    /// FZ forecast: precision, interval, explicit dimensions, +100 min.
    pub const FZ: &str = "FZ282105100000716BY 405160VS 3SW   2.13.1PR E-01INT   5GP 450x 450VV 100MF \
        00000002MS 66<boo,ros,emd,hnr,umd,pro,ess,drs,neu,nhb,oft,eis,tur,isn,fbg,mem>\x03";

    /// Header length of [`FZ`] in bytes.
    pub const FZ_LENGTH: usize = 154;
}

/// A geographic point and its expected pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub lat: f64,
    pub lon: f64,
    pub x: f64,
    pub y: f64,
}

const fn point(lat: f64, lon: f64, x: f64, y: f64) -> ProjectedPoint {
    ProjectedPoint { lat, lon, x, y }
}

/// Expected projections for one grid at its native size.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionCase {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub format_version: i64,
    pub points: &'static [ProjectedPoint],
}

impl ProjectionCase {
    /// Point positions on a grid scaled down by `divisor`.
    pub fn scaled_points(&self, divisor: f64) -> impl Iterator<Item = ProjectedPoint> + '_ {
        self.points
            .iter()
            .map(move |p| point(p.lat, p.lon, p.x / divisor, p.y / divisor))
    }
}

/// Corner and center points of the known grids.
pub mod projection {
    use super::{point, ProjectionCase};

    pub const NATIONAL: ProjectionCase = ProjectionCase {
        name: "national",
        width: 900,
        height: 900,
        format_version: 0,
        points: &[
            point(54.5877, 2.0715, 0.0, 0.0),
            point(54.7405, 15.7208, 900.0, 0.0),
            point(51.0, 9.0, 450.0, 450.0),
            point(46.9526, 3.5889, 0.0, 900.0),
            point(47.0705, 14.6209, 900.0, 900.0),
        ],
    };

    pub const NATIONAL_PICTURE: ProjectionCase = ProjectionCase {
        name: "national picture",
        width: 460,
        height: 460,
        format_version: 0,
        points: &[
            point(54.66218275, 1.900684377, 0.0, 0.0),
            point(54.81884457, 15.88724008, 460.0, 0.0),
            point(51.0, 9.0, 230.0, 230.0),
            point(46.86029310, 3.481345126, 0.0, 460.0),
            point(46.98044293, 14.73300934, 460.0, 460.0),
        ],
    };

    pub const EXTENDED_NATIONAL: ProjectionCase = ProjectionCase {
        name: "extended national",
        width: 900,
        height: 1100,
        format_version: 0,
        points: &[
            point(55.5482, 3.0889, 0.0, 0.0),
            point(55.5342, 17.1128, 900.0, 0.0),
            point(51.0, 9.0, 370.0, 550.0),
            point(46.1929, 4.6759, 0.0, 1100.0),
            point(46.1827, 15.4801, 900.0, 1100.0),
        ],
    };

    pub const WIDE_SPHERE: ProjectionCase = ProjectionCase {
        name: "wide (sphere)",
        width: 1100,
        height: 1200,
        format_version: 3,
        points: &[
            point(55.86584289, 1.435612143, 0.0, 0.0),
            point(55.84848692, 18.76728172, 1100.0, 0.0),
            point(51.0, 9.0, 470.0, 600.0),
            point(45.69587048, 3.551921296, 0.0, 1200.0),
            point(45.68358331, 16.60186543, 1100.0, 1200.0),
        ],
    };

    pub const MIDDLE_EUROPEAN: ProjectionCase = ProjectionCase {
        name: "middle european",
        width: 1400,
        height: 1500,
        format_version: 0,
        points: &[
            point(56.5423, -0.8654, 0.0, 0.0),
            point(56.4505, 21.6986, 1400.0, 0.0),
            point(51.0, 9.0, 600.0, 700.0),
            point(43.9336, 2.3419, 0.0, 1500.0),
            point(43.8736, 18.2536, 1400.0, 1500.0),
        ],
    };

    /// Spherical grids, checked to 0.1 px.
    pub const SPHERICAL: [ProjectionCase; 5] = [
        NATIONAL,
        NATIONAL_PICTURE,
        EXTENDED_NATIONAL,
        WIDE_SPHERE,
        MIDDLE_EUROPEAN,
    ];

    /// Wide grid on the WGS84 ellipsoid, checked to 0.001 px.
    pub const WIDE_WGS84: ProjectionCase = ProjectionCase {
        name: "wide (wgs84)",
        width: 1100,
        height: 1200,
        format_version: 5,
        points: &[
            point(55.86208711, 1.463301510, 0.0, 0.0),
            point(55.84543856, 18.73161645, 1100.0, 0.0),
            point(45.68460578, 16.58086935, 1100.0, 1200.0),
            point(45.69642538, 3.566994635, 0.0, 1200.0),
        ],
    };
}

/// Two cities and their distance on the projection plane.
pub mod distance {
    /// (lat, lon) of Munich
    pub const MUNICH: (f64, f64) = (48.173146, 11.546604);

    /// (lat, lon) of Bremerhaven
    pub const BREMERHAVEN: (f64, f64) = (53.534366, 8.576135);

    /// Planar distance in km
    pub const KM: f64 = 663.629945199998;
}
