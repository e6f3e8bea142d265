//! # Banano Blocks Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Codec | base32 encode/decode of a 32-byte key |
//! | Address | derive, validate, extract public key |
//! | Units | BAN ↔ RAW conversion |
//! | Assembly | sign a send block with Ed25519-BLAKE2b |

use ban_blocks::domain::base32;
use ban_blocks::{
    address_to_public_key_hex, convert_unit, derive_address, validate_address,
    Blake2bEd25519Signer, BlockAssembler, BlockAssemblyApi, SendInput,
};
use ban_crypto::BlakeEd25519KeyPair;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use std::time::Duration;

fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut key);
    key
}

// ============================================================================
// Codec
// ============================================================================

fn bench_base32(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/base32");
    let key = random_key();
    let encoded = base32::encode(&key);

    group.bench_function("encode_32_bytes", |b| {
        b.iter(|| black_box(base32::encode(black_box(&key))))
    });
    group.bench_function("decode_52_symbols", |b| {
        b.iter(|| black_box(base32::decode(black_box(&encoded))))
    });
    group.finish();
}

// ============================================================================
// Address
// ============================================================================

fn bench_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("address");
    let public_key_hex = hex::encode_upper(random_key());
    let address = derive_address(&public_key_hex).unwrap_or_default();

    group.bench_function("derive", |b| {
        b.iter(|| black_box(derive_address(black_box(&public_key_hex))))
    });
    group.bench_function("validate", |b| {
        b.iter(|| black_box(validate_address(black_box(&address))))
    });
    group.bench_function("to_public_key", |b| {
        b.iter(|| black_box(address_to_public_key_hex(black_box(&address))))
    });

    for size in [10u64, 100, 1000] {
        let addresses: Vec<String> = (0..size)
            .filter_map(|_| derive_address(&hex::encode(random_key())).ok())
            .collect();
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(
            BenchmarkId::new("validate_batch", size),
            &addresses,
            |b, addresses| {
                b.iter(|| addresses.iter().filter(|a| validate_address(a)).count())
            },
        );
    }
    group.finish();
}

// ============================================================================
// Units
// ============================================================================

fn bench_units(c: &mut Criterion) {
    let mut group = c.benchmark_group("units");

    group.bench_function("ban_to_raw", |b| {
        b.iter(|| black_box(convert_unit(black_box("1234.56789"), "BAN", "RAW")))
    });
    group.bench_function("raw_to_ban", |b| {
        b.iter(|| {
            black_box(convert_unit(
                black_box("123456789000000000000000000000000"),
                "RAW",
                "BAN",
            ))
        })
    });
    group.finish();
}

// ============================================================================
// Assembly
// ============================================================================

fn bench_sign_send(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");
    group.measurement_time(Duration::from_secs(10));

    let private_key = random_key();
    let keypair = BlakeEd25519KeyPair::from_private_key(&private_key);
    let from_address =
        derive_address(&hex::encode_upper(keypair.public_key().as_bytes())).unwrap_or_default();
    let to_address = derive_address(&hex::encode_upper(random_key())).unwrap_or_default();

    let input = SendInput {
        wallet_balance_raw: "100000000000000000000000000000".into(),
        from_address: from_address.clone(),
        to_address,
        representative_address: from_address,
        frontier: hex::encode_upper(random_key()),
        amount_raw: "1000000000000000000000000000".into(),
        work: None,
    };
    let private_key_hex = hex::encode_upper(private_key);
    let assembler = BlockAssembler::new(Blake2bEd25519Signer::new());

    group.bench_function("sign_send_block", |b| {
        b.iter(|| black_box(assembler.sign_send_block(black_box(&input), &private_key_hex)))
    });
    group.bench_function("send_preimage_hash", |b| {
        b.iter(|| black_box(assembler.send_preimage(&input).and_then(|p| p.hash())))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_base32,
    bench_address,
    bench_units,
    bench_sign_send
);
criterion_main!(benches);
