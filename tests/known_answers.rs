// FIPS-197 appendix vectors, written as big-endian hex the way the standard prints them

use aes128::{Cipher, Direction, Error, Key, Result, cipher, expand_key};
use hex_literal::hex;

#[test]
fn fips197_c1_encrypt_and_decrypt() -> Result<()> {
    let key = Key::try_from_slice(&hex!("000102030405060708090a0b0c0d0e0f"))?;
    let plaintext = hex!("00112233445566778899aabbccddeeff");
    let ciphertext = hex!("69c4e0d86a7b0430d8cdb78070b4c55a");

    let cipher = Cipher::new(&key);
    assert_eq!(cipher.encrypt_block(&plaintext)?, ciphertext);
    assert_eq!(cipher.decrypt_block(&ciphertext)?, plaintext);
    Ok(())
}

#[test]
fn fips197_appendix_b() {
    let round_keys = expand_key(&Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c")));
    let plaintext = hex!("3243f6a8885a308d313198a2e0370734");
    let ciphertext = hex!("3925841d02dc09fbdc118597196a0b32");

    assert_eq!(cipher(&plaintext, &round_keys, Direction::Encrypt), ciphertext);
    assert_eq!(cipher(&ciphertext, &round_keys, Direction::Decrypt), plaintext);
}

#[test]
fn fips197_a1_full_schedule() {
    let expected = [
        hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        hex!("a0fafe1788542cb123a339392a6c7605"),
        hex!("f2c295f27a96b9435935807a7359f67f"),
        hex!("3d80477d4716fe3e1e237e446d7a883b"),
        hex!("ef44a541a8525b7fb671253bdb0bad00"),
        hex!("d4d1c6f87c839d87caf2b8bc11f915bc"),
        hex!("6d88a37a110b3efddbf98641ca0093fd"),
        hex!("4e54f70e5f5fc9f384a64fb24ea6dc4f"),
        hex!("ead27321b58dbad2312bf5607f8d292f"),
        hex!("ac7766f319fadc2128d12941575c006e"),
        hex!("d014f9a8c9ee2589e13f0cc8b6630ca6"),
    ];

    let round_keys = expand_key(&Key::from(expected[0]));
    assert_eq!(round_keys.as_slice(), &expected);
}

#[test]
fn nist_sp800_38a_ecb_block() -> Result<()> {
    // F.1.1, first block
    let cipher = Cipher::new(&Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c")));
    assert_eq!(
        cipher.encrypt_block(&hex!("6bc1bee22e409f96e93d7e117393172a"))?,
        hex!("3ad77bb40d7a3660a89ecaf32466ef97")
    );
    Ok(())
}

#[test]
fn boundary_lengths_are_rejected() {
    let bytes = [0u8; 17];
    assert!(matches!(
        Key::try_from_slice(&bytes[..15]),
        Err(Error::InvalidKeyLength { len: 15 })
    ));
    assert!(matches!(
        Key::try_from_slice(&bytes),
        Err(Error::InvalidKeyLength { len: 17 })
    ));

    let cipher = Cipher::new(&Key::from([0u8; 16]));
    assert!(matches!(
        cipher.encrypt_block(&bytes[..15]),
        Err(Error::InvalidBlockLength { len: 15 })
    ));
    assert!(matches!(
        cipher.decrypt_block(&bytes),
        Err(Error::InvalidBlockLength { len: 17 })
    ));
}

#[test]
fn self_test_passes() -> Result<()> {
    aes128::self_test()
}
