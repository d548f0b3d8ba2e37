//! Milenage kernel function E_K
//!
//! TS 35.206 builds every Milenage output from one 128-bit block cipher
//! keyed with K. Here the kernel is AES-128 from the RustCrypto `aes` crate.
//! All Milenage arithmetic happens on 128-bit [`Block`] values passed by copy.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;

/// Kernel block width in bytes
pub const BLOCK_SIZE: usize = 16;

/// Kernel key width in bytes
pub const KEY_SIZE: usize = 16;

/// One 128-bit kernel block
pub type Block = [u8; BLOCK_SIZE];

/// E_K keyed with the subscriber key K.
#[derive(Clone)]
pub struct Kernel {
    cipher: Aes128,
}

impl Kernel {
    pub fn new(k: &[u8; KEY_SIZE]) -> Self {
        Self {
            cipher: Aes128::new(GenericArray::from_slice(k)),
        }
    }

    /// E_K(input)
    pub fn encrypt(&self, input: Block) -> Block {
        let mut buf = GenericArray::clone_from_slice(&input);
        self.cipher.encrypt_block(&mut buf);
        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(&buf);
        out
    }

    /// E_K(input) XOR mask, the whitening step shared by OPc and OUT1..OUT5
    pub fn encrypt_then_mask(&self, input: Block, mask: &Block) -> Block {
        xor(&self.encrypt(input), mask)
    }
}

/// a XOR b
#[inline]
pub fn xor(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    out.iter_mut().zip(b).for_each(|(x, y)| *x ^= y);
    out
}
