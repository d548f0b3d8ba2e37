//! Report rendering
//!
//! The text report is the `[INPUT]` / `[OUTPUT]` block layout; YAML and JSON
//! carry the same labels and values as one document.

use anyhow::Result;
use serde::Serialize;

use akaio_common::{encode_hex_upper, OutputFormat};

use crate::vector::AuthVector;

/// Width labels are padded to in the text report.
pub const LABEL_WIDTH: usize = 6;

fn push_line(out: &mut String, label: &str, data: &[u8]) {
    out.push_str(&format!("{:<width$}: {}\n", label, encode_hex_upper(data), width = LABEL_WIDTH));
}

/// Renders the text report.
///
/// ```text
/// [INPUT]
/// K     : 465B5CE8B199B49FAA5F0A2EE238A6BC
/// ...
/// [OUTPUT]
/// MAC-A : 4A9FFAC354DFAFB3
/// ...
/// ```
pub fn render_text(vector: &AuthVector) -> String {
    let mut out = String::new();
    out.push_str("[INPUT]\n");
    for (label, data) in vector.input_fields() {
        push_line(&mut out, label, data);
    }
    out.push_str("[OUTPUT]\n");
    for (label, data) in vector.output_fields() {
        push_line(&mut out, label, data);
    }
    out
}

/// Input section of a structured report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReport {
    #[serde(rename = "K")]
    pub k: String,
    #[serde(rename = "OP", skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    #[serde(rename = "OPc")]
    pub opc: String,
    #[serde(rename = "RAND")]
    pub rand: String,
    #[serde(rename = "AMF")]
    pub amf: String,
    #[serde(rename = "SQN")]
    pub sqn: String,
}

/// Output section of a structured report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputReport {
    #[serde(rename = "MAC-A")]
    pub mac_a: String,
    #[serde(rename = "MAC-S")]
    pub mac_s: String,
    #[serde(rename = "RES")]
    pub res: String,
    #[serde(rename = "CK")]
    pub ck: String,
    #[serde(rename = "IK")]
    pub ik: String,
    #[serde(rename = "AK")]
    pub ak: String,
    #[serde(rename = "AKS")]
    pub aks: String,
    #[serde(rename = "AUTN")]
    pub autn: String,
    #[serde(rename = "AUTS")]
    pub auts: String,
}

/// Structured form of a vector, uppercase hex throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorReport {
    pub input: InputReport,
    pub output: OutputReport,
}

impl From<&AuthVector> for VectorReport {
    fn from(vector: &AuthVector) -> Self {
        let input = &vector.input;
        let outputs = &vector.outputs;
        let op = match input.op_type {
            akaio_common::OpType::Op => Some(encode_hex_upper(&input.op)),
            akaio_common::OpType::Opc => None,
        };
        Self {
            input: InputReport {
                k: encode_hex_upper(&input.k),
                op,
                opc: encode_hex_upper(&vector.opc),
                rand: encode_hex_upper(&input.rand),
                amf: encode_hex_upper(&input.amf),
                sqn: encode_hex_upper(&input.sqn),
            },
            output: OutputReport {
                mac_a: encode_hex_upper(&outputs.mac_a),
                mac_s: encode_hex_upper(&outputs.mac_s),
                res: encode_hex_upper(&outputs.res),
                ck: encode_hex_upper(&outputs.ck),
                ik: encode_hex_upper(&outputs.ik),
                ak: encode_hex_upper(&outputs.ak),
                aks: encode_hex_upper(&outputs.ak_s),
                autn: encode_hex_upper(&vector.autn),
                auts: encode_hex_upper(&vector.auts),
            },
        }
    }
}

/// Renders `vector` in the requested format.
pub fn render(vector: &AuthVector, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(vector)),
        structured => Ok(structured.serialize(&VectorReport::from(vector))?),
    }
}
