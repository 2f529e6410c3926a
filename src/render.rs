//! Image renderers for the visualization commands.
//!
//! Renderers only draw. Filtering out absent values is the caller's job, and
//! an empty input is still drawn (as an empty chart) if a caller passes one.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExplorerError, Result};
use crate::record::GeoPoint;

/// Draws a slice of points into an image file at `path`.
pub trait Renderer<P> {
    fn render(&self, points: &[P], path: &Path) -> Result<()>;
}

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 360.0;

fn write_svg(path: &Path, body: impl FnOnce(&mut dyn Write) -> std::io::Result<()>) -> Result<()> {
    let wrap = |source: std::io::Error| ExplorerError::Render {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    (|| {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
        )?;
        body(&mut out)?;
        writeln!(out, "</svg>")?;
        out.flush()
    })()
    .map_err(wrap)
}

/// Histogram of numeric values as an SVG bar chart.
pub struct SvgHistogram {
    pub bins: usize,
}

impl SvgHistogram {
    /// Bucket counts over `[min, max]`. The maximum lands in the last bucket.
    pub fn bucket(&self, values: &[f64]) -> Vec<usize> {
        let bins = self.bins.max(1);
        let mut counts = vec![0; bins];
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = max - min;
        for &v in values {
            let idx = if span > 0.0 {
                (((v - min) / span) * bins as f64) as usize
            } else {
                0
            };
            counts[idx.min(bins - 1)] += 1;
        }
        counts
    }
}

impl Renderer<f64> for SvgHistogram {
    fn render(&self, values: &[f64], path: &Path) -> Result<()> {
        let counts = self.bucket(values);
        let tallest = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
        let bar_width = WIDTH / counts.len() as f64;
        write_svg(path, |out| {
            for (i, &count) in counts.iter().enumerate() {
                let h = count as f64 / tallest * (HEIGHT - 10.0);
                writeln!(
                    out,
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="steelblue"/>"#,
                    i as f64 * bar_width,
                    HEIGHT - h,
                    (bar_width - 1.0).max(1.0),
                    h
                )?;
            }
            Ok(())
        })
    }
}

/// Equirectangular world map with one dot per position.
pub struct SvgMap;

impl SvgMap {
    /// Project a position onto the canvas.
    pub fn project(point: &GeoPoint) -> (f64, f64) {
        let x = (point.longitude.clamp(-180.0, 180.0) + 180.0) / 360.0 * WIDTH;
        let y = (90.0 - point.latitude.clamp(-90.0, 90.0)) / 180.0 * HEIGHT;
        (x, y)
    }
}

impl Renderer<GeoPoint> for SvgMap {
    fn render(&self, points: &[GeoPoint], path: &Path) -> Result<()> {
        write_svg(path, |out| {
            writeln!(out, r##"<rect width="100%" height="100%" fill="#dceefb"/>"##)?;
            for point in points {
                let (x, y) = Self::project(point);
                writeln!(out, r#"<circle cx="{x:.2}" cy="{y:.2}" r="1.5" fill="crimson"/>"#)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_bucket_spreads_values() {
        let hist = SvgHistogram { bins: 4 };
        assert_eq!(hist.bucket(&[0.0, 1.0, 2.0, 3.0, 4.0]), vec![1, 1, 1, 2]);
        assert_eq!(hist.bucket(&[5.0, 5.0]), vec![2, 0, 0, 0]);
        assert_eq!(hist.bucket(&[]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_histogram_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speed.svg");
        SvgHistogram { bins: 3 }.render(&[1.0, 2.0, 3.0], &path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_map_projection_and_output() {
        let corner = SvgMap::project(&GeoPoint {
            longitude: -180.0,
            latitude: 90.0,
        });
        assert_eq!(corner, (0.0, 0.0));
        let center = SvgMap::project(&GeoPoint {
            longitude: 0.0,
            latitude: 0.0,
        });
        assert_eq!(center, (WIDTH / 2.0, HEIGHT / 2.0));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        let points = [
            GeoPoint {
                longitude: 10.0,
                latitude: 55.0,
            },
            GeoPoint {
                longitude: -70.0,
                latitude: 40.0,
            },
        ];
        SvgMap.render(&points, &path).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn test_unwritable_path_is_render_error() {
        let err = SvgMap
            .render(&[], Path::new("/definitely/not/here/map.svg"))
            .unwrap_err();
        assert!(matches!(err, ExplorerError::Render { .. }));
    }
}
