//! Safetensors I/O for recordings fed to the complexity metrics.
//!
//! A recording file holds:
//!   `data`      [C, T]  F32 or F64   signal in any consistent unit
//!   `sfreq`     [1]     F32 or F64   sampling rate (Hz), informational only
//!   `ch_names`  [n]     U8           optional, newline-separated UTF-8 names
use anyhow::{bail, Context, Result};
use ndarray::Array2;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use tracing::warn;

use crate::reference::channel_index;

// ── Low-level safetensors parser (raw bytes → ndarray, no tensor crate). ─────

fn parse_header(bytes: &[u8]) -> Result<(HashMap<String, serde_json::Value>, usize)> {
    if bytes.len() < 8 {
        bail!("safetensors file too small");
    }
    let n = u64::from_le_bytes(bytes[..8].try_into()?) as usize;
    let end = 8usize.checked_add(n).filter(|&e| e <= bytes.len())
        .context("safetensors header length exceeds file size")?;
    let header: HashMap<String, serde_json::Value> =
        serde_json::from_slice(&bytes[8..end]).context("failed to parse safetensors header")?;
    Ok((header, end))
}

fn tensor_bytes<'a>(bytes: &'a [u8], data_start: usize, entry: &serde_json::Value) -> Result<&'a [u8]> {
    let offsets = entry["data_offsets"].as_array().context("missing data_offsets")?;
    let s = offsets.first().and_then(|v| v.as_u64()).context("bad data_offsets")? as usize;
    let e = offsets.get(1).and_then(|v| v.as_u64()).context("bad data_offsets")? as usize;
    let start = data_start.checked_add(s).context("tensor offset overflows")?;
    let end = data_start.checked_add(e).context("tensor offset overflows")?;
    bytes.get(start..end).context("tensor data out of bounds")
}

fn read_f64_tensor(bytes: &[u8], data_start: usize, entry: &serde_json::Value) -> Result<Vec<f64>> {
    let raw = tensor_bytes(bytes, data_start, entry)?;
    match entry["dtype"].as_str() {
        Some("F32") => Ok(raw
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]) as f64)
            .collect()),
        Some("F64") => Ok(raw
            .chunks_exact(8)
            .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
            .collect()),
        other => bail!("unsupported dtype {other:?} (expected F32 or F64)"),
    }
}

fn shape_of(entry: &serde_json::Value) -> Result<Vec<usize>> {
    entry["shape"]
        .as_array()
        .context("missing shape")?
        .iter()
        .map(|v| v.as_u64().map(|d| d as usize).context("bad shape entry"))
        .collect()
}

// ── Public structs ────────────────────────────────────────────────────────────

/// A multichannel recording loaded from a `.safetensors` file.
#[derive(Debug, Clone)]
pub struct RawData {
    /// [C, T] signal matrix.
    pub data: Array2<f64>,
    /// Sampling rate (Hz).  Not used by the metrics.
    pub sfreq: f64,
    /// Channel names (`ch0`, `ch1`, … when the file has none).
    pub ch_names: Vec<String>,
}

impl RawData {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let (header, data_start) = parse_header(&bytes)?;

        let data_entry = header.get("data").context("missing 'data' key")?;
        let shape = shape_of(data_entry)?;
        if shape.len() != 2 {
            bail!("'data' must be 2-D [C, T], got shape {shape:?}");
        }
        let values = read_f64_tensor(&bytes, data_start, data_entry)?;
        let data = Array2::from_shape_vec((shape[0], shape[1]), values)
            .context("'data' byte length does not match its shape")?;

        let sfreq_entry = header.get("sfreq").context("missing 'sfreq' key")?;
        let sfreq = *read_f64_tensor(&bytes, data_start, sfreq_entry)?
            .first()
            .context("empty 'sfreq' tensor")?;

        let ch_names: Vec<String> = match header.get("ch_names") {
            Some(e) => {
                let raw = std::str::from_utf8(tensor_bytes(&bytes, data_start, e)?)?;
                raw.split('\n').filter(|s| !s.is_empty()).map(String::from).collect()
            }
            None => (0..data.nrows()).map(|c| format!("ch{c}")).collect(),
        };
        if ch_names.len() != data.nrows() {
            bail!("{} channel names for {} data rows", ch_names.len(), data.nrows());
        }

        Ok(RawData { data, sfreq, ch_names })
    }

    /// Write the recording back out (F64 data, F64 sfreq, U8 names).
    pub fn save(&self, path: &Path) -> Result<()> {
        let data_bytes: Vec<u8> = self.data.iter().flat_map(|v| v.to_le_bytes()).collect();
        let sfreq_bytes = self.sfreq.to_le_bytes().to_vec();
        let names_bytes = self.ch_names.join("\n").into_bytes();

        let tensors: [(&str, &str, Vec<usize>, Vec<u8>); 3] = [
            ("data", "F64", vec![self.data.nrows(), self.data.ncols()], data_bytes),
            ("sfreq", "F64", vec![1], sfreq_bytes),
            ("ch_names", "U8", vec![names_bytes.len()], names_bytes),
        ];

        let mut header_map = serde_json::Map::new();
        let mut offset: usize = 0;
        for (name, dtype, shape, data) in &tensors {
            header_map.insert(name.to_string(), serde_json::json!({
                "dtype": dtype,
                "shape": shape,
                "data_offsets": [offset, offset + data.len()],
            }));
            offset += data.len();
        }
        let hdr_bytes = serde_json::to_vec(&header_map)?;
        let pad = (8 - hdr_bytes.len() % 8) % 8;
        let padded: Vec<u8> = hdr_bytes.into_iter()
            .chain(std::iter::repeat(b' ').take(pad))
            .collect();

        let mut f = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        f.write_all(&(padded.len() as u64).to_le_bytes())?;
        f.write_all(&padded)?;
        for (_, _, _, data) in &tensors {
            f.write_all(data)?;
        }
        Ok(())
    }

    /// Keep only the named channels, in the order given.
    ///
    /// Names that do not exist are skipped with a warning; picking nothing is an error.
    pub fn pick_channels(&self, picks: &[String]) -> Result<RawData> {
        let mut idx = Vec::with_capacity(picks.len());
        for name in picks {
            match channel_index(&self.ch_names, name) {
                Ok(i) => idx.push(i),
                Err(_) => warn!(channel = %name, "picked channel not in recording, skipping"),
            }
        }
        if idx.is_empty() {
            bail!("none of the picked channels exist in the recording");
        }
        Ok(RawData {
            data: self.data.select(ndarray::Axis(0), &idx),
            sfreq: self.sfreq,
            ch_names: idx.iter().map(|&i| self.ch_names[i].clone()).collect(),
        })
    }
}
