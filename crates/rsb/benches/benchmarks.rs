use rsb::Arbitrary;
use rsb::Connection;
use rsb::ID;
use rsb::gameplay::Choice;
use rsb::gameplay::Solo;
use rsb::gameplay::resolve;
use rsb::gameroom::Event;
use rsb::gameroom::Manager;
use rsb::gameroom::Protocol;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        resolving_random_rounds,
        throwing_solo_rounds,
        decoding_choice_frames,
        pairing_queued_connections,
        playing_full_match,
}

fn resolving_random_rounds(c: &mut criterion::Criterion) {
    c.bench_function("resolve a random round", |b| {
        b.iter(|| resolve(Choice::random(), Choice::random()))
    });
}

fn throwing_solo_rounds(c: &mut criterion::Criterion) {
    let mut solo = Solo::default();
    c.bench_function("throw a solo round against the CPU", |b| {
        b.iter(|| solo.play(Choice::random()))
    });
}

fn decoding_choice_frames(c: &mut criterion::Criterion) {
    let frame = r#"{"type":"make_choice","game_id":"game_1234","choice":"rock"}"#;
    c.bench_function("decode a make_choice frame", |b| {
        b.iter(|| Protocol::decode(frame))
    });
}

fn pairing_queued_connections(c: &mut criterion::Criterion) {
    c.bench_function("pair two queued connections", |b| {
        b.iter(|| {
            let manager = Manager::new();
            let a = ID::<Connection>::default();
            let z = ID::<Connection>::default();
            manager.connect(a);
            manager.connect(z);
            manager.request(a, None).ok();
            manager.request(z, None).ok()
        })
    });
}

fn playing_full_match(c: &mut criterion::Criterion) {
    c.bench_function("play a full match through the manager", |b| {
        b.iter(|| {
            let manager = Manager::new();
            let a = ID::<Connection>::default();
            let z = ID::<Connection>::default();
            manager.connect(a);
            manager.connect(z);
            manager.request(a, None).ok();
            let id = manager
                .request(z, None)
                .unwrap_or_default()
                .into_iter()
                .find_map(|notice| match notice.event {
                    Event::MatchFound { session, .. } => Some(session),
                    _ => None,
                })
                .expect("paired");
            for _ in 0..rsb::MAX_ROUNDS {
                manager.choose(a, &id, Choice::random().label()).ok();
                manager.choose(z, &id, Choice::random().label()).ok();
            }
            manager.snapshot(&id)
        })
    });
}
