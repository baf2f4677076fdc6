//! Published SHA-256 test vectors and cross-checks against the `sha2` crate

use digestr_common::LoggingTransformer;
use digestr_hashing::{hex_encode, HashContext, HashError, DIGEST_SIZE};
use hex_literal::hex;
use sha2::{Digest as _, Sha256};

fn hash_chunks(chunks: &[&[u8]]) -> Result<[u8; 32], HashError> {
    let mut ctx = HashContext::new();
    for chunk in chunks {
        ctx.update(chunk)?;
    }
    Ok(ctx.finish()?.into_bytes())
}

#[test]
fn test_empty_vector() -> Result<(), HashError> {
    let digest = hash_chunks(&[])?;
    assert_eq!(
        hex_encode(&digest),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    Ok(())
}

#[test]
fn test_abc_vector() -> Result<(), HashError> {
    let digest = hash_chunks(&[b"abc"])?;
    assert_eq!(
        hex_encode(&digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    Ok(())
}

#[test]
fn test_two_block_vectors() -> Result<(), HashError> {
    let digest = hash_chunks(&[b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"])?;
    assert_eq!(
        digest,
        hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")
    );

    let digest = hash_chunks(&[
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn",
        b"hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
    ])?;
    assert_eq!(
        digest,
        hex!("cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1")
    );
    Ok(())
}

#[test]
fn test_one_million_a() -> Result<(), HashError> {
    LoggingTransformer::init_test();
    let chunk = [b'a'; 1000];
    let mut ctx = HashContext::new();
    for _ in 0..1000 {
        ctx.update(chunk)?;
    }
    assert_eq!(ctx.total_len(), 1_000_000);
    assert_eq!(
        ctx.finish()?.into_bytes(),
        hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
    );
    Ok(())
}

#[test]
fn test_matches_reference_for_every_length_up_to_three_blocks() -> Result<(), HashError> {
    let data: Vec<u8> = (0..=192u32).map(|i| (i * 31 % 251) as u8).collect();
    for len in 0..=data.len() {
        let expected: [u8; DIGEST_SIZE] = Sha256::digest(&data[..len]).into();
        assert_eq!(HashContext::digest(&data[..len]).into_bytes(), expected, "length {len}");

        let (head, tail) = data[..len].split_at(len / 3);
        assert_eq!(hash_chunks(&[head, &[], tail])?, expected, "split length {len}");
    }
    Ok(())
}

#[test]
fn test_argument_style_input_concatenates() -> Result<(), HashError> {
    // Separate updates behave like one update of the joined bytes, no separator
    assert_eq!(hash_chunks(&[b"hello", b" ", b"world"])?, hash_chunks(&[b"hello world"])?);
    assert_eq!(
        hash_chunks(&[b"hello"])?,
        hex!("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
    );
    Ok(())
}
