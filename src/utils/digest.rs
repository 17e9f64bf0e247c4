// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! SHA-256 digest helpers.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a file and return its lowercase hex digest.
///
/// Returns the raw `io::Error` so callers can tag it with their own phase
/// and path context.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::hash_file;

    // Known SHA-256 test vectors: the empty input and "abc".
    #[test]
    fn hash_file_matches_known_vectors() {
        let tmp = TempDir::new().unwrap();
        let empty = tmp.path().join("empty.bin");
        fs::write(&empty, b"").unwrap();
        assert_eq!(
            hash_file(&empty).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        let abc = tmp.path().join("abc.txt");
        fs::write(&abc, b"abc").unwrap();
        assert_eq!(
            hash_file(&abc).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    // Content larger than one read buffer must hash the same as a copy.
    #[test]
    fn hash_file_is_stable_across_buffer_boundaries() {
        let tmp = TempDir::new().unwrap();
        let content = vec![0x5au8; 20_000];
        let first = tmp.path().join("first.bin");
        let second = tmp.path().join("second.bin");
        fs::write(&first, &content).unwrap();
        fs::write(&second, &content).unwrap();

        let digest = hash_file(&first).unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, hash_file(&second).unwrap());
    }

    #[test]
    fn hash_file_propagates_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let result = hash_file(&tmp.path().join("absent.bin"));
        assert!(result.is_err());
    }
}
