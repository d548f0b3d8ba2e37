//! Authentication vector computation
//!
//! Turns validated inputs into a full vector: the Milenage outputs come from
//! `akaio-crypto`, AUTN is assembled here byte by byte.

use anyhow::{Context, Result};
use tracing::{debug, info};

use akaio_common::{decode_hex_array, log_vector_field, OpType};
use akaio_crypto::milenage::{
    AuthOutputs, Milenage, AK_SIZE, AMF_SIZE, AUTS_SIZE, KEY_SIZE, MAC_SIZE, OP_SIZE, RAND_SIZE,
    SQN_SIZE,
};

/// AUTN size in bytes: (SQN XOR AK) || AMF || MAC-A
pub const AUTN_SIZE: usize = SQN_SIZE + AMF_SIZE + MAC_SIZE;

/// Validated inputs, all at their exact sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorInput {
    /// Subscriber key K
    pub k: [u8; KEY_SIZE],
    /// OP or OPc, according to `op_type`
    pub op: [u8; OP_SIZE],
    /// How to interpret `op`
    pub op_type: OpType,
    /// Random challenge
    pub rand: [u8; RAND_SIZE],
    /// Authentication management field
    pub amf: [u8; AMF_SIZE],
    /// Sequence number
    pub sqn: [u8; SQN_SIZE],
}

impl VectorInput {
    /// Validates the five hex strings in command-line order.
    ///
    /// Errors carry an `Invalid <field>` context naming the offending field.
    pub fn parse(k: &str, op: &str, rand: &str, amf: &str, sqn: &str, op_type: OpType) -> Result<Self> {
        let op_label = op_type.label();
        Ok(Self {
            k: decode_hex_array(k, "K").context("Invalid K")?,
            op: decode_hex_array(op, op_label).with_context(|| format!("Invalid {op_label}"))?,
            op_type,
            rand: decode_hex_array(rand, "RAND").context("Invalid RAND")?,
            amf: decode_hex_array(amf, "AMF").context("Invalid AMF")?,
            sqn: decode_hex_array(sqn, "SQN").context("Invalid SQN")?,
        })
    }

    /// AMF as a big-endian 16-bit integer.
    pub fn amf_value(&self) -> u16 {
        u16::from_be_bytes(self.amf)
    }

    /// SQN as a big-endian integer, zero-padded to 64 bits.
    pub fn sqn_value(&self) -> u64 {
        let mut padded = [0u8; 8];
        padded[8 - SQN_SIZE..].copy_from_slice(&self.sqn);
        u64::from_be_bytes(padded)
    }
}

/// A computed authentication vector together with the inputs it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthVector {
    pub input: VectorInput,
    /// OPc actually used; equals `input.op` unless OP was given
    pub opc: [u8; OP_SIZE],
    pub outputs: AuthOutputs,
    pub autn: [u8; AUTN_SIZE],
    pub auts: [u8; AUTS_SIZE],
}

/// AUTN = (SQN XOR AK) || AMF || MAC-A
pub fn build_autn(
    sqn: &[u8; SQN_SIZE],
    ak: &[u8; AK_SIZE],
    amf: &[u8; AMF_SIZE],
    mac_a: &[u8; MAC_SIZE],
) -> [u8; AUTN_SIZE] {
    let mut autn = [0u8; AUTN_SIZE];
    for (i, byte) in autn[..SQN_SIZE].iter_mut().enumerate() {
        *byte = sqn[i] ^ ak[i];
    }
    autn[SQN_SIZE..SQN_SIZE + AMF_SIZE].copy_from_slice(amf);
    autn[SQN_SIZE + AMF_SIZE..].copy_from_slice(mac_a);
    autn
}

/// Runs Milenage for `input` and assembles AUTN and AUTS.
pub fn compute_vector(input: &VectorInput) -> Result<AuthVector> {
    let milenage = match input.op_type {
        OpType::Opc => Milenage::from_slices(&input.k, &input.op),
        OpType::Op => Milenage::from_slices_with_op(&input.k, &input.op),
    }
    .context("Milenage setup failed")?;

    let amf = input.amf_value();
    let sqn = input.sqn_value();
    debug!(op_type = %input.op_type, amf, sqn, "Computing Milenage vector");

    let outputs = milenage
        .compute_all(&input.rand, sqn, amf)
        .context("Milenage computation failed")?;

    let autn = build_autn(&input.sqn, &outputs.ak, &input.amf, &outputs.mac_a);

    let auts = milenage
        .generate_auts(&input.rand, sqn)
        .context("AUTS generation failed")?;

    let vector = AuthVector {
        input: input.clone(),
        opc: *milenage.opc(),
        outputs,
        autn,
        auts,
    };
    for (label, data) in vector.output_fields() {
        log_vector_field(label, data);
    }
    info!("Authentication vector computed");
    Ok(vector)
}

impl AuthVector {
    /// Output fields in report order.
    pub fn output_fields(&self) -> [(&'static str, &[u8]); 9] {
        [
            ("MAC-A", &self.outputs.mac_a[..]),
            ("MAC-S", &self.outputs.mac_s[..]),
            ("RES", &self.outputs.res[..]),
            ("CK", &self.outputs.ck[..]),
            ("IK", &self.outputs.ik[..]),
            ("AK", &self.outputs.ak[..]),
            ("AKS", &self.outputs.ak_s[..]),
            ("AUTN", &self.autn[..]),
            ("AUTS", &self.auts[..]),
        ]
    }

    /// Input fields in report order. With OP input the derived OPc follows OP.
    pub fn input_fields(&self) -> Vec<(&'static str, &[u8])> {
        let mut fields: Vec<(&'static str, &[u8])> = vec![("K", &self.input.k[..])];
        match self.input.op_type {
            OpType::Opc => fields.push(("OPc", &self.input.op[..])),
            OpType::Op => {
                fields.push(("OP", &self.input.op[..]));
                fields.push(("OPc", &self.opc[..]));
            }
        }
        fields.push(("RAND", &self.input.rand[..]));
        fields.push(("AMF", &self.input.amf[..]));
        fields.push(("SQN", &self.input.sqn[..]));
        fields
    }
}
