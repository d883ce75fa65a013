//! Channel re-referencing applied before the complexity metrics.
//!
//! - `Average`:   data[c, t] −= mean(data[:, t])                 (all channels kept)
//! - `Monopolar`: data[c, t] −= data[ref, t]                     (reference channel dropped)
//! - `Bipolar`:   out[k, t]   = data[anode_k, t] − data[cathode_k, t]   (one row per pair, named "A-C")
//!
//! Each returns a new `[C', T]` matrix and its channel names; the input is not
//! modified.  Name matching is case-insensitive and ignores spaces.
use anyhow::{bail, Context, Result};
use ndarray::{Array2, Axis};

/// Reference scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Common average reference.
    Average,
    /// Single reference electrode subtracted from every other channel.
    Monopolar(String),
    /// Explicit anode/cathode pairs.
    Bipolar(Vec<(String, String)>),
}

impl Reference {
    /// Parse `"average"`, `"monopolar:<ch>"` or `"bipolar:<a>-<c>,<a>-<c>,…"`.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.eq_ignore_ascii_case("average") || spec.eq_ignore_ascii_case("avg") {
            return Ok(Self::Average);
        }
        if let Some(ch) = spec.strip_prefix("monopolar:") {
            if ch.trim().is_empty() {
                bail!("monopolar reference needs a channel name");
            }
            return Ok(Self::Monopolar(ch.trim().to_string()));
        }
        if let Some(pairs) = spec.strip_prefix("bipolar:") {
            let pairs = pairs
                .split(',')
                .filter(|p| !p.trim().is_empty())
                .map(|p| -> Result<(String, String)> {
                    let (a, c) = p
                        .split_once('-')
                        .with_context(|| format!("bipolar pair '{p}' is not 'anode-cathode'"))?;
                    Ok((a.trim().to_string(), c.trim().to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
            if pairs.is_empty() {
                bail!("bipolar reference needs at least one pair");
            }
            return Ok(Self::Bipolar(pairs));
        }
        bail!("unknown reference '{spec}' (expected average, monopolar:<ch> or bipolar:<a>-<c>,…)")
    }
}

/// Apply `reference` to `data` ([C, T]) whose rows are named by `ch_names`.
pub fn apply_reference(
    data: &Array2<f64>,
    ch_names: &[String],
    reference: &Reference,
) -> Result<(Array2<f64>, Vec<String>)> {
    if ch_names.len() != data.nrows() {
        bail!("{} channel names for {} data rows", ch_names.len(), data.nrows());
    }
    match reference {
        Reference::Average => Ok((average_reference(data), ch_names.to_vec())),
        Reference::Monopolar(ref_name) => {
            let r = channel_index(ch_names, ref_name)?;
            let ref_row = data.row(r).to_owned();
            let keep: Vec<usize> = (0..data.nrows()).filter(|&c| c != r).collect();
            let mut out = data.select(Axis(0), &keep);
            for mut row in out.rows_mut() {
                row -= &ref_row;
            }
            let names = keep.iter().map(|&c| ch_names[c].clone()).collect();
            Ok((out, names))
        }
        Reference::Bipolar(pairs) => {
            let mut out = Array2::<f64>::zeros((pairs.len(), data.ncols()));
            let mut names = Vec::with_capacity(pairs.len());
            for (k, (anode, cathode)) in pairs.iter().enumerate() {
                let a = channel_index(ch_names, anode)?;
                let c = channel_index(ch_names, cathode)?;
                out.row_mut(k).assign(&(&data.row(a) - &data.row(c)));
                names.push(format!("{}-{}", ch_names[a], ch_names[c]));
            }
            Ok((out, names))
        }
    }
}

/// Average reference: subtract the mean across channels at each time point.
pub fn average_reference(data: &Array2<f64>) -> Array2<f64> {
    let mut out = data.clone();
    if let Some(means) = data.mean_axis(Axis(0)) {
        for mut row in out.rows_mut() {
            row -= &means;
        }
    }
    out
}

/// Index of `name` in `ch_names` (case-insensitive, spaces ignored).
pub fn channel_index(ch_names: &[String], name: &str) -> Result<usize> {
    let norm = |s: &str| s.replace(' ', "").to_lowercase();
    let target = norm(name);
    ch_names
        .iter()
        .position(|n| norm(n) == target)
        .with_context(|| format!("channel '{name}' not found"))
}
