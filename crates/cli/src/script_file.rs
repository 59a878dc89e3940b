//! Script files: JSON envelope with an inline polygon or a CSV polygon file.
//!
//! ```json
//! { "polygon": [[0, 0], [4, 0], [4, 4], [0, 4]],
//!   "ops": ["+ 0 2", "? 1 3"],
//!   "one_based": false }
//! ```

use anyhow::{anyhow, bail, Context, Result};
use dissect::prelude::{parse_script, IndexBase, Op, Polygon, Vec2};
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ScriptFile {
    #[serde(default)]
    pub polygon: Option<Vec<[i64; 2]>>,
    #[serde(default)]
    pub ops: Vec<String>,
    #[serde(default)]
    pub one_based: bool,
}

/// Polygon and parsed operations ready for replay.
pub struct Loaded {
    pub polygon: Polygon,
    pub ops: Vec<Op>,
    pub base: IndexBase,
}

pub fn load(input: &Path, polygon_csv: Option<&Path>, one_based_flag: bool) -> Result<Loaded> {
    let raw = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let file: ScriptFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing script {}", input.display()))?;
    let base = if one_based_flag || file.one_based {
        IndexBase::One
    } else {
        IndexBase::Zero
    };
    let polygon = match (polygon_csv, file.polygon) {
        (Some(csv), _) => Polygon::from_f64(&read_polygon_csv(csv)?),
        (None, Some(pts)) => Polygon::new(pts.into_iter().map(|[x, y]| Vec2::new(x, y)).collect()),
        (None, None) => bail!("no polygon: give \"polygon\" in the script or --polygon <csv>"),
    }
    .context("invalid polygon")?;
    let ops = parse_script(&file.ops.join("\n"), base).context("invalid operation")?;
    tracing::info!(n = polygon.len(), ops = ops.len(), ?base, "script_loaded");
    Ok(Loaded { polygon, ops, base })
}

/// Read vertices from a CSV with `x` and `y` columns, in row order.
///
/// Values come back as reals so that fractional entries reach polygon
/// validation instead of being truncated by the cast.
pub fn read_polygon_csv(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading polygon csv {}", path.display()))?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let pts = xs
        .f64()?
        .into_iter()
        .zip(ys.f64()?.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("row {row}: missing or non-numeric coordinate")),
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(rows = df.height(), "polygon_csv_read");
    Ok(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn csv_keeps_fractional_coordinates() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("poly.csv");
        fs::write(&csv, "x,y\n0.5,0\n4,0\n4,4\n0,4\n").unwrap();
        let pts = read_polygon_csv(&csv).unwrap();
        assert_eq!(pts[0], Vec2::new(0.5, 0.0));
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn load_rejects_fractional_csv_vertex() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("poly.csv");
        fs::write(&csv, "x,y\n0.5,0\n4,0\n4,4\n0,4\n").unwrap();
        let script = dir.path().join("script.json");
        fs::write(&script, r#"{"ops": ["+ 0 2"]}"#).unwrap();
        let err = load(&script, Some(&csv), false).err().unwrap();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid polygon"), "{msg}");
        assert!(msg.contains("vertex 0 coordinate 0.5 is not an integer"), "{msg}");
    }

    #[test]
    fn load_rejects_extreme_inline_coordinate() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.json");
        fs::write(
            &script,
            r#"{"polygon": [[-9223372036854775808, 0], [4, 0], [0, 4]], "ops": []}"#,
        )
        .unwrap();
        let err = load(&script, None, false).err().unwrap();
        assert!(format!("{err:#}").contains("outside"), "{err:#}");
    }
}
