//! Performance benchmarks for wgmodel
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use wgmodel::{Device, Key, Peer};

fn bench_key_generation(c: &mut Criterion) {
    c.bench_function("key_generation", |b| {
        b.iter(|| {
            let _key = Key::generate();
        });
    });
}

fn bench_public_key_derivation(c: &mut Criterion) {
    let private_key = Key::generate();

    c.bench_function("public_key_derivation", |b| {
        b.iter(|| {
            let _public = black_box(&private_key).public_key();
        });
    });
}

fn bench_key_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_text");

    let key = Key::generate().public_key();
    let text = key.to_base64();

    group.bench_function("encode", |b| {
        b.iter(|| {
            let _text = black_box(&key).to_base64();
        });
    });

    group.bench_function("parse", |b| {
        b.iter(|| {
            let _key = Key::from_base64(black_box(&text)).unwrap();
        });
    });

    group.finish();
}

fn sample_device(peer_count: usize) -> Device {
    let private_key = Key::generate();
    let mut device = Device {
        name: "wg0".to_string(),
        public_key: private_key.public_key(),
        private_key,
        listen_port: 51820,
        ..Device::default()
    };

    for i in 0..peer_count {
        let mut peer = Peer::new(Key::generate().public_key());
        peer.allowed_ips = vec![format!("10.0.{}.0/24", i % 256).parse().unwrap()];
        device.peers.push(peer);
    }

    device
}

fn bench_device_with_peers(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_with_peers");

    for peer_count in [1, 5, 10, 50].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(peer_count),
            peer_count,
            |b, &count| {
                let keys: Vec<Key> = (0..count).map(|_| Key::generate().public_key()).collect();

                b.iter(|| {
                    let mut device = Device::default();
                    device.name = "wg0".to_string();

                    for key in &keys {
                        device.peers.push(Peer::new(*key));
                    }

                    black_box(device);
                });
            },
        );
    }

    group.finish();
}

fn bench_device_serde(c: &mut Criterion) {
    let device = sample_device(10);
    let json = serde_json::to_string(&device).unwrap();

    let mut group = c.benchmark_group("device_serde");

    group.bench_function("json_serialize", |b| {
        b.iter(|| {
            let _json = serde_json::to_string(black_box(&device)).unwrap();
        });
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| {
            let _device: Device = serde_json::from_str(black_box(&json)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_key_generation,
    bench_public_key_derivation,
    bench_key_text,
    bench_device_with_peers,
    bench_device_serde,
);

criterion_main!(benches);
