//! # Integration Test Flows
//!
//! Receive and send blocks assembled by `BlockAssembler` with the real
//! Ed25519-BLAKE2b signer, then checked independently with `ban-crypto`.
//!
//! ## Flows Tested:
//!
//! 1. **Key → address → block**: an account derived from a private key signs its own blocks
//! 2. **Chained blocks**: a send whose frontier is the hash of the preceding receive
//! 3. **Concurrent assembly**: one shared assembler, many threads, identical output

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use ban_blocks::{
        derive_address, verify_block_signature, AssemblerConfig, Blake2bEd25519Signer,
        BlockAssembler, BlockAssemblyApi, BlockError, ReceiveInput, SendInput, SignedBlock,
        PREAMBLE,
    };
    use ban_crypto::{blake2b_256, BlakeEd25519KeyPair, BlakeEd25519Signature};
    use rand::RngCore;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Account {
        private_key_hex: String,
        public_key_hex: String,
        address: String,
    }

    impl Account {
        fn from_private_key(private_key: [u8; 32]) -> Self {
            let keypair = BlakeEd25519KeyPair::from_private_key(&private_key);
            let public_key_hex = hex::encode_upper(keypair.public_key().as_bytes());
            let address = derive_address(&public_key_hex).unwrap();
            Self {
                private_key_hex: hex::encode_upper(private_key),
                public_key_hex,
                address,
            }
        }

        fn random() -> Self {
            let mut key = [0u8; 32];
            rand::thread_rng().fill_bytes(&mut key);
            Self::from_private_key(key)
        }
    }

    const OPEN_FRONTIER: &str = "7837C80964CAD551DEABE162C7FC4BB58688A0C6EB6D9907C0D2A7C74A33C7EB";
    const SEND_HASH: &str = "A170D51B94E00371ACE76E35AC81DC9405D5D04D4CEBC399AEACE07AE05DD293";

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn assembler() -> BlockAssembler<Blake2bEd25519Signer> {
        init_tracing();
        BlockAssembler::new(Blake2bEd25519Signer::new())
    }

    fn receive_for(account: &Account, representative: &Account) -> ReceiveInput {
        ReceiveInput {
            wallet_balance_raw: "1000".into(),
            to_address: account.address.clone(),
            transaction_hash: SEND_HASH.into(),
            frontier: OPEN_FRONTIER.into(),
            representative_address: representative.address.clone(),
            amount_raw: "500".into(),
            work: Some("fa0c9a1ba3f5b8c1".into()),
        }
    }

    /// Recompute the block hash from a signed block and check its signature
    /// with nothing but ban-crypto.
    fn verify_independently(
        block: &SignedBlock,
        account: &Account,
        representative_hex: &str,
        link_hex: &str,
    ) {
        let balance: u128 = block.balance.parse().unwrap();
        let preimage = format!(
            "{PREAMBLE}{}{}{}{:032X}{}",
            account.public_key_hex, block.previous, representative_hex, balance, link_hex
        );
        let hash = blake2b_256(&hex::decode(preimage).unwrap());

        let signature: [u8; 64] = hex::decode(&block.signature).unwrap().try_into().unwrap();
        let keypair = BlakeEd25519KeyPair::from_private_key(
            &hex::decode(&account.private_key_hex).unwrap().try_into().unwrap(),
        );
        keypair
            .public_key()
            .verify(&hash, &BlakeEd25519Signature::from_bytes(signature))
            .expect("signature must verify against the account key");
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_receive_block_signed_by_account_key() {
        let account = Account::random();
        let representative = Account::random();
        let assembler = assembler();
        let input = receive_for(&account, &representative);

        let block = assembler
            .sign_receive_block(&input, &account.private_key_hex)
            .unwrap();

        assert_eq!(block.account, account.address);
        assert_eq!(block.balance, "1500");
        assert_eq!(block.link, SEND_HASH);
        assert_eq!(block.work, "fa0c9a1ba3f5b8c1");

        let preimage = assembler.receive_preimage(&input).unwrap();
        assert_eq!(preimage.account(), account.public_key_hex);
        assert!(verify_block_signature(&preimage, &block.signature).is_ok());
        verify_independently(&block, &account, &representative.public_key_hex, SEND_HASH);
    }

    #[test]
    fn test_send_block_links_destination_key() {
        let sender = Account::random();
        let destination = Account::random();
        let representative = Account::random();
        let assembler = assembler();

        let input = SendInput {
            wallet_balance_raw: "100000000000000000000000000000".into(),
            from_address: sender.address.clone(),
            to_address: destination.address.clone(),
            representative_address: representative.address.clone(),
            frontier: OPEN_FRONTIER.into(),
            amount_raw: "1".into(),
            work: None,
        };

        let block = assembler
            .sign_send_block(&input, &sender.private_key_hex)
            .unwrap();

        assert_eq!(block.account, sender.address);
        assert_eq!(block.link, destination.public_key_hex);
        assert_eq!(block.balance, "99999999999999999999999999999");
        assert_eq!(block.work, "");
        verify_independently(
            &block,
            &sender,
            &representative.public_key_hex,
            &destination.public_key_hex,
        );
    }

    #[test]
    fn test_receive_then_send_chain() {
        let account = Account::random();
        let destination = Account::random();
        let assembler = assembler();

        let receive = receive_for(&account, &account);
        let received = assembler
            .sign_receive_block(&receive, &account.private_key_hex)
            .unwrap();
        let receive_hash = assembler.receive_preimage(&receive).unwrap().hash().unwrap();

        let send = SendInput {
            wallet_balance_raw: received.balance.clone(),
            from_address: account.address.clone(),
            to_address: destination.address.clone(),
            representative_address: account.address.clone(),
            frontier: hex::encode_upper(receive_hash),
            amount_raw: "1500".into(),
            work: None,
        };
        let sent = assembler
            .sign_send_block(&send, &account.private_key_hex)
            .unwrap();

        assert_eq!(sent.previous, hex::encode_upper(receive_hash));
        assert_eq!(sent.balance, "0");
        let preimage = assembler.send_preimage(&send).unwrap();
        assert!(verify_block_signature(&preimage, &sent.signature).is_ok());
    }

    #[test]
    fn test_wrong_private_key_does_not_verify() {
        let account = Account::random();
        let impostor = Account::random();
        let assembler = assembler();
        let input = receive_for(&account, &account);

        let block = assembler
            .sign_receive_block(&input, &impostor.private_key_hex)
            .unwrap();

        let preimage = assembler.receive_preimage(&input).unwrap();
        assert!(verify_block_signature(&preimage, &block.signature).is_err());
    }

    #[test]
    fn test_malformed_private_key_is_signing_failure() {
        let account = Account::random();
        let assembler = assembler();

        let err = assembler
            .sign_receive_block(&receive_for(&account, &account), "not-a-key")
            .unwrap_err();
        assert!(matches!(err, BlockError::SigningFailed(_)));
    }

    #[test]
    fn test_signed_block_round_trips_through_json() {
        let account = Account::random();
        let assembler = BlockAssembler::with_config(
            Blake2bEd25519Signer::new(),
            AssemblerConfig {
                default_work: "0000000000000000".into(),
                log_rejections: false,
            },
        );
        let mut input = receive_for(&account, &account);
        input.work = None;

        let block = assembler
            .sign_receive_block(&input, &account.private_key_hex)
            .unwrap();
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""type":"state""#));

        let back: SignedBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
        assert_eq!(back.work, "0000000000000000");
    }

    #[test]
    fn test_concurrent_assembly_is_deterministic() {
        let account = Account::from_private_key([0x42; 32]);
        let assembler = Arc::new(assembler());
        let input = Arc::new(receive_for(&account, &account));
        let key = Arc::new(account.private_key_hex.clone());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let assembler = Arc::clone(&assembler);
                let input = Arc::clone(&input);
                let key = Arc::clone(&key);
                thread::spawn(move || assembler.sign_receive_block(&input, &key).unwrap())
            })
            .collect();

        let blocks: Vec<SignedBlock> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(blocks.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
