use aes128::transforms::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    state, sub_bytes,
};
use aes128::{Direction, Key, cipher, expand_key};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let round_keys = expand_key(&Key::from(key));
        let ct = cipher(&block, &round_keys, Direction::Encrypt);
        prop_assert_eq!(cipher(&ct, &round_keys, Direction::Decrypt), block);
    }

    #[test]
    fn encrypt_inverts_decrypt(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let round_keys = expand_key(&Key::from(key));
        let pt = cipher(&block, &round_keys, Direction::Decrypt);
        prop_assert_eq!(cipher(&pt, &round_keys, Direction::Encrypt), block);
    }

    #[test]
    fn schedule_is_pure(key in any::<[u8; 16]>()) {
        let key = Key::from(key);
        let a = expand_key(&key);
        let b = expand_key(&key);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.get(0), key.as_bytes());
    }

    #[test]
    fn inverse_transforms_undo_forward(s in any::<[u8; 16]>()) {
        let mut t = s;
        mix_columns(&mut t);
        inv_mix_columns(&mut t);
        prop_assert_eq!(t, s);

        shift_rows(&mut t);
        inv_shift_rows(&mut t);
        prop_assert_eq!(t, s);

        sub_bytes(&mut t);
        inv_sub_bytes(&mut t);
        prop_assert_eq!(t, s);
    }

    #[test]
    fn add_round_key_is_involution(s in any::<[u8; 16]>(), k in any::<[u8; 16]>()) {
        let mut t = s;
        add_round_key(&mut t, &k);
        add_round_key(&mut t, &k);
        prop_assert_eq!(t, s);
    }

    #[test]
    fn word_and_byte_views_agree(s in any::<[u8; 16]>()) {
        prop_assert_eq!(state::from_columns(state::to_columns(&s)), s);
        for col in 0..4 {
            for row in 0..4 {
                let byte = (state::column(&s, col) >> (24 - 8 * row)) as u8;
                prop_assert_eq!(byte, s[state::index(row, col)]);
                let byte = (state::row(&s, row) >> (24 - 8 * col)) as u8;
                prop_assert_eq!(byte, s[state::index(row, col)]);
            }
        }
    }
}
