//! Host boundary for the pqkem Kyber-512 KEM.
//!
//! Exposes the KEM as seven `extern "C"` functions over raw byte buffers, for
//! web-assembly hosts and other C-ABI callers:
//!
//! | function                    | returns                         |
//! |-----------------------------|---------------------------------|
//! | `get_public_key_bytes()`    | 800                             |
//! | `get_secret_key_bytes()`    | 1632                            |
//! | `get_ciphertext_bytes()`    | 768                             |
//! | `get_shared_secret_bytes()` | 32                              |
//! | `generate_keypair(pk, sk)`  | 0 on success, 1 on failure      |
//! | `encapsulate(ct, ss, pk)`   | 0 on success, 1 on failure      |
//! | `decapsulate(ss, ct, sk)`   | 0 on success, 1 on failure      |
//!
//! Buffers are allocated by the host to the sizes reported above. Nothing is
//! written to an output buffer unless the call returns 0.
//!
//! Rust callers should use the safe functions in [`entry`].

#![deny(unsafe_op_in_unsafe_fn)]

pub mod entry;

use core::slice;

use log::warn;

pub use entry::Status;

fn size_code(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(0)
}

/// Public key length in bytes.
#[no_mangle]
pub extern "C" fn get_public_key_bytes() -> i32 {
    size_code(entry::sizes().public_key)
}

/// Secret key length in bytes.
#[no_mangle]
pub extern "C" fn get_secret_key_bytes() -> i32 {
    size_code(entry::sizes().secret_key)
}

/// Ciphertext length in bytes.
#[no_mangle]
pub extern "C" fn get_ciphertext_bytes() -> i32 {
    size_code(entry::sizes().ciphertext)
}

/// Shared secret length in bytes.
#[no_mangle]
pub extern "C" fn get_shared_secret_bytes() -> i32 {
    size_code(entry::sizes().shared_secret)
}

/// Generates a keypair.
///
/// # Safety
///
/// `pk` must be valid for writes of [`get_public_key_bytes`] bytes and `sk`
/// for writes of [`get_secret_key_bytes`] bytes. The two regions must not
/// overlap. Null pointers are rejected.
#[no_mangle]
pub unsafe extern "C" fn generate_keypair(pk: *mut u8, sk: *mut u8) -> i32 {
    if pk.is_null() || sk.is_null() {
        warn!("generate_keypair: null buffer");
        return Status::Failure.into();
    }
    let sizes = entry::sizes();
    // SAFETY: non-null, and the caller guarantees length and exclusivity.
    let (pk, sk) = unsafe {
        (
            slice::from_raw_parts_mut(pk, sizes.public_key),
            slice::from_raw_parts_mut(sk, sizes.secret_key),
        )
    };
    entry::keypair_into(pk, sk).into()
}

/// Encapsulates a fresh shared secret to `pk`.
///
/// # Safety
///
/// `ct` must be valid for writes of [`get_ciphertext_bytes`] bytes, `ss` for
/// writes of [`get_shared_secret_bytes`] bytes and `pk` for reads of
/// [`get_public_key_bytes`] bytes. `ct` and `ss` must not overlap each other
/// or `pk`. Null pointers are rejected.
#[no_mangle]
pub unsafe extern "C" fn encapsulate(ct: *mut u8, ss: *mut u8, pk: *const u8) -> i32 {
    if ct.is_null() || ss.is_null() || pk.is_null() {
        warn!("encapsulate: null buffer");
        return Status::Failure.into();
    }
    let sizes = entry::sizes();
    // SAFETY: non-null, and the caller guarantees lengths and exclusivity.
    let (ct, ss, pk) = unsafe {
        (
            slice::from_raw_parts_mut(ct, sizes.ciphertext),
            slice::from_raw_parts_mut(ss, sizes.shared_secret),
            slice::from_raw_parts(pk, sizes.public_key),
        )
    };
    entry::encapsulate_into(ct, ss, pk).into()
}

/// Recovers the shared secret carried by `ct`.
///
/// # Safety
///
/// `ss` must be valid for writes of [`get_shared_secret_bytes`] bytes, `ct`
/// for reads of [`get_ciphertext_bytes`] bytes and `sk` for reads of
/// [`get_secret_key_bytes`] bytes. `ss` must not overlap `ct` or `sk`. Null
/// pointers are rejected.
#[no_mangle]
pub unsafe extern "C" fn decapsulate(ss: *mut u8, ct: *const u8, sk: *const u8) -> i32 {
    if ss.is_null() || ct.is_null() || sk.is_null() {
        warn!("decapsulate: null buffer");
        return Status::Failure.into();
    }
    let sizes = entry::sizes();
    // SAFETY: non-null, and the caller guarantees lengths and exclusivity.
    let (ss, ct, sk) = unsafe {
        (
            slice::from_raw_parts_mut(ss, sizes.shared_secret),
            slice::from_raw_parts(ct, sizes.ciphertext),
            slice::from_raw_parts(sk, sizes.secret_key),
        )
    };
    entry::decapsulate_into(ss, ct, sk).into()
}
