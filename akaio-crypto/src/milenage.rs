//! Milenage algorithm set (3GPP TS 35.206)
//!
//! Milenage is the 3GPP authentication and key generation algorithm set used
//! in UMTS, LTE and 5G:
//! - f1: network authentication (MAC-A)
//! - f1*: re-synchronisation authentication (MAC-S)
//! - f2: user authentication (RES)
//! - f3: cipher key (CK)
//! - f4: integrity key (IK)
//! - f5: anonymity key (AK)
//! - f5*: re-synchronisation anonymity key (AK*, printed as AKS)
//!
//! [`Milenage::compute_all`] and [`Milenage::generate_auts`] are the entry
//! points for callers holding raw byte slices and integer SQN/AMF values.
//! The individual functions work on fixed-size arrays.

use thiserror::Error;

use crate::kernel::{xor, Block, Kernel, BLOCK_SIZE};

/// Key size in bytes (128 bits)
pub const KEY_SIZE: usize = 16;

/// OP/OPc size in bytes (128 bits)
pub const OP_SIZE: usize = 16;

/// RAND size in bytes (128 bits)
pub const RAND_SIZE: usize = 16;

/// SQN size in bytes (48 bits)
pub const SQN_SIZE: usize = 6;

/// AMF size in bytes (16 bits)
pub const AMF_SIZE: usize = 2;

/// MAC-A / MAC-S size in bytes (64 bits)
pub const MAC_SIZE: usize = 8;

/// RES size in bytes (64 bits)
pub const RES_SIZE: usize = 8;

/// CK size in bytes (128 bits)
pub const CK_SIZE: usize = 16;

/// IK size in bytes (128 bits)
pub const IK_SIZE: usize = 16;

/// AK / AK* size in bytes (48 bits)
pub const AK_SIZE: usize = 6;

/// AUTS size in bytes: concealed SQN followed by MAC-S
pub const AUTS_SIZE: usize = SQN_SIZE + MAC_SIZE;

/// Largest sequence number representable in 48 bits
pub const SQN_MAX: u64 = (1 << 48) - 1;

/// AMF used for MAC-S inside AUTS (TS 33.102 6.3.3)
pub const RESYNC_AMF: u16 = 0x0000;

// Last byte of the constants c1..c5; every other byte is zero.
const C1: u8 = 0x00;
const C2: u8 = 0x01;
const C3: u8 = 0x02;
const C4: u8 = 0x04;
const C5: u8 = 0x08;

// Rotation amounts r1..r5 in bits.
const R1: usize = 64;
const R2: usize = 0;
const R3: usize = 32;
const R4: usize = 64;
const R5: usize = 96;

/// Errors returned by the slice/integer entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MilenageError {
    /// An input slice has the wrong size.
    #[error("{name} must be {expected} bytes, got {actual}")]
    InvalidLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// SQN does not fit in 48 bits.
    #[error("SQN {0:#x} does not fit in 48 bits")]
    SqnOutOfRange(u64),
}

/// Every value produced by one Milenage run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthOutputs {
    /// f1 output
    pub mac_a: [u8; MAC_SIZE],
    /// f1* output
    pub mac_s: [u8; MAC_SIZE],
    /// f2 output
    pub res: [u8; RES_SIZE],
    /// f3 output
    pub ck: [u8; CK_SIZE],
    /// f4 output
    pub ik: [u8; IK_SIZE],
    /// f5 output
    pub ak: [u8; AK_SIZE],
    /// f5* output
    pub ak_s: [u8; AK_SIZE],
}

fn fixed<const N: usize>(name: &'static str, data: &[u8]) -> Result<[u8; N], MilenageError> {
    <[u8; N]>::try_from(data).map_err(|_| MilenageError::InvalidLength {
        name,
        expected: N,
        actual: data.len(),
    })
}

/// Converts an integer SQN into its 6-byte big-endian form.
pub fn sqn_to_bytes(sqn: u64) -> Result<[u8; SQN_SIZE], MilenageError> {
    if sqn > SQN_MAX {
        return Err(MilenageError::SqnOutOfRange(sqn));
    }
    let mut out = [0u8; SQN_SIZE];
    out.copy_from_slice(&sqn.to_be_bytes()[8 - SQN_SIZE..]);
    Ok(out)
}

/// Rotate a 128-bit block left by `bits` positions
fn rotate_left(block: &Block, bits: usize) -> Block {
    let bits = bits % 128;
    if bits == 0 {
        return *block;
    }

    let byte_shift = bits / 8;
    let bit_shift = bits % 8;
    let mut result = [0u8; BLOCK_SIZE];

    for (i, out) in result.iter_mut().enumerate() {
        let src = block[(i + byte_shift) % BLOCK_SIZE];
        let next = block[(i + byte_shift + 1) % BLOCK_SIZE];
        *out = if bit_shift == 0 {
            src
        } else {
            (src << bit_shift) | (next >> (8 - bit_shift))
        };
    }

    result
}

/// Compute OPc from OP and K
///
/// OPc = OP XOR E_K(OP)
pub fn compute_opc(k: &[u8; KEY_SIZE], op: &[u8; OP_SIZE]) -> [u8; OP_SIZE] {
    Kernel::new(k).encrypt_then_mask(*op, op)
}

/// Milenage algorithm context: the cipher keyed with K plus OPc.
#[derive(Clone)]
pub struct Milenage {
    kernel: Kernel,
    opc: [u8; OP_SIZE],
}

impl Milenage {
    /// Create a new Milenage instance with K and OPc
    pub fn new(k: &[u8; KEY_SIZE], opc: &[u8; OP_SIZE]) -> Self {
        Self {
            kernel: Kernel::new(k),
            opc: *opc,
        }
    }

    /// Create a new Milenage instance with K and OP (computes OPc internally)
    pub fn new_with_op(k: &[u8; KEY_SIZE], op: &[u8; OP_SIZE]) -> Self {
        let opc = compute_opc(k, op);
        Self::new(k, &opc)
    }

    /// Like [`Milenage::new`], checking slice sizes first.
    pub fn from_slices(k: &[u8], opc: &[u8]) -> Result<Self, MilenageError> {
        let k = fixed::<KEY_SIZE>("K", k)?;
        let opc = fixed::<OP_SIZE>("OPc", opc)?;
        Ok(Self::new(&k, &opc))
    }

    /// Like [`Milenage::new_with_op`], checking slice sizes first.
    pub fn from_slices_with_op(k: &[u8], op: &[u8]) -> Result<Self, MilenageError> {
        let k = fixed::<KEY_SIZE>("K", k)?;
        let op = fixed::<OP_SIZE>("OP", op)?;
        Ok(Self::new_with_op(&k, &op))
    }

    /// The OPc in use (derived when constructed from OP).
    pub fn opc(&self) -> &[u8; OP_SIZE] {
        &self.opc
    }

    /// TEMP = E_K(RAND XOR OPc)
    fn compute_temp(&self, rand: &[u8; RAND_SIZE]) -> Block {
        self.kernel.encrypt(xor(rand, &self.opc))
    }

    /// OUT1 = E_K(TEMP XOR rot(IN1 XOR OPc, r1) XOR c1) XOR OPc,
    /// with IN1 = SQN || AMF || SQN || AMF
    fn compute_out1(
        &self,
        temp: &Block,
        sqn: &[u8; SQN_SIZE],
        amf: &[u8; AMF_SIZE],
    ) -> Block {
        let mut in1 = [0u8; BLOCK_SIZE];
        in1[0..6].copy_from_slice(sqn);
        in1[6..8].copy_from_slice(amf);
        in1[8..14].copy_from_slice(sqn);
        in1[14..16].copy_from_slice(amf);

        let mut block = xor(&rotate_left(&xor(&in1, &self.opc), R1), temp);
        block[BLOCK_SIZE - 1] ^= C1;
        self.kernel.encrypt_then_mask(block, &self.opc)
    }

    /// OUTn = E_K(rot(TEMP XOR OPc, rn) XOR cn) XOR OPc, for n in 2..=5
    fn compute_out(&self, temp: &Block, rotation: usize, constant: u8) -> Block {
        let mut block = rotate_left(&xor(temp, &self.opc), rotation);
        block[BLOCK_SIZE - 1] ^= constant;
        self.kernel.encrypt_then_mask(block, &self.opc)
    }

    /// f1 - Network authentication function, MAC-A
    pub fn f1(&self, rand: &[u8; RAND_SIZE], sqn: &[u8; SQN_SIZE], amf: &[u8; AMF_SIZE]) -> [u8; MAC_SIZE] {
        let out1 = self.compute_out1(&self.compute_temp(rand), sqn, amf);
        let mut mac_a = [0u8; MAC_SIZE];
        mac_a.copy_from_slice(&out1[0..8]);
        mac_a
    }

    /// f1* - Re-synchronisation authentication function, MAC-S
    pub fn f1_star(&self, rand: &[u8; RAND_SIZE], sqn: &[u8; SQN_SIZE], amf: &[u8; AMF_SIZE]) -> [u8; MAC_SIZE] {
        let out1 = self.compute_out1(&self.compute_temp(rand), sqn, amf);
        let mut mac_s = [0u8; MAC_SIZE];
        mac_s.copy_from_slice(&out1[8..16]);
        mac_s
    }

    /// f2 - User authentication function, RES
    pub fn f2(&self, rand: &[u8; RAND_SIZE]) -> [u8; RES_SIZE] {
        let out2 = self.compute_out(&self.compute_temp(rand), R2, C2);
        let mut res = [0u8; RES_SIZE];
        res.copy_from_slice(&out2[8..16]);
        res
    }

    /// f3 - Cipher key derivation function, CK
    pub fn f3(&self, rand: &[u8; RAND_SIZE]) -> [u8; CK_SIZE] {
        self.compute_out(&self.compute_temp(rand), R3, C3)
    }

    /// f4 - Integrity key derivation function, IK
    pub fn f4(&self, rand: &[u8; RAND_SIZE]) -> [u8; IK_SIZE] {
        self.compute_out(&self.compute_temp(rand), R4, C4)
    }

    /// f5 - Anonymity key derivation function, AK
    pub fn f5(&self, rand: &[u8; RAND_SIZE]) -> [u8; AK_SIZE] {
        let out2 = self.compute_out(&self.compute_temp(rand), R2, C2);
        let mut ak = [0u8; AK_SIZE];
        ak.copy_from_slice(&out2[0..6]);
        ak
    }

    /// f5* - Re-synchronisation anonymity key derivation function, AK*
    pub fn f5_star(&self, rand: &[u8; RAND_SIZE]) -> [u8; AK_SIZE] {
        let out5 = self.compute_out(&self.compute_temp(rand), R5, C5);
        let mut ak = [0u8; AK_SIZE];
        ak.copy_from_slice(&out5[0..6]);
        ak
    }

    /// Compute f1, f1*, f2, f3, f4, f5 and f5* in one pass.
    ///
    /// # Arguments
    /// * `rand` - 16-byte random challenge
    /// * `sqn` - sequence number, at most 48 bits
    /// * `amf` - authentication management field
    ///
    /// # Errors
    /// [`MilenageError::InvalidLength`] if `rand` is not 16 bytes,
    /// [`MilenageError::SqnOutOfRange`] if `sqn` exceeds 48 bits.
    pub fn compute_all(&self, rand: &[u8], sqn: u64, amf: u16) -> Result<AuthOutputs, MilenageError> {
        let rand = fixed::<RAND_SIZE>("RAND", rand)?;
        let sqn = sqn_to_bytes(sqn)?;
        let amf = amf.to_be_bytes();

        let temp = self.compute_temp(&rand);
        let out1 = self.compute_out1(&temp, &sqn, &amf);
        let out2 = self.compute_out(&temp, R2, C2);
        let out5 = self.compute_out(&temp, R5, C5);

        let mut outputs = AuthOutputs {
            mac_a: [0u8; MAC_SIZE],
            mac_s: [0u8; MAC_SIZE],
            res: [0u8; RES_SIZE],
            ck: self.compute_out(&temp, R3, C3),
            ik: self.compute_out(&temp, R4, C4),
            ak: [0u8; AK_SIZE],
            ak_s: [0u8; AK_SIZE],
        };
        outputs.mac_a.copy_from_slice(&out1[0..8]);
        outputs.mac_s.copy_from_slice(&out1[8..16]);
        outputs.res.copy_from_slice(&out2[8..16]);
        outputs.ak.copy_from_slice(&out2[0..6]);
        outputs.ak_s.copy_from_slice(&out5[0..6]);
        Ok(outputs)
    }

    /// Build the re-synchronisation token AUTS = (SQN XOR AK*) || MAC-S.
    ///
    /// MAC-S is computed with AMF = 0x0000 whatever AMF the challenge carried.
    pub fn generate_auts(&self, rand: &[u8], sqn: u64) -> Result<[u8; AUTS_SIZE], MilenageError> {
        let rand = fixed::<RAND_SIZE>("RAND", rand)?;
        let sqn = sqn_to_bytes(sqn)?;

        let ak_s = self.f5_star(&rand);
        let mac_s = self.f1_star(&rand, &sqn, &RESYNC_AMF.to_be_bytes());

        let mut auts = [0u8; AUTS_SIZE];
        for (i, byte) in auts[..SQN_SIZE].iter_mut().enumerate() {
            *byte = sqn[i] ^ ak_s[i];
        }
        auts[SQN_SIZE..].copy_from_slice(&mac_s);
        Ok(auts)
    }
}
