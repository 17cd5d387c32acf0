use quasarlib::cards::card::Card;
use quasarlib::cards::street::Street;
use quasarlib::cards::strength::Strength;
use quasarlib::gameplay::state::PublicState;
use quasarlib::solver::eval::RiverEvalConfig;
use quasarlib::solver::solve::solve_one;
use quasarlib::solver::solve::SolveConfig;

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
        evaluating_plo_river_strength,
        solving_one_river_decision,
        solving_one_flop_decision,
}

fn evaluating_plo_river_strength(c: &mut criterion::Criterion) {
    let hole = [0u8, 14, 27, 45].map(Card::from);
    let board = [5u8, 19, 33, 47, 9].map(Card::from);
    c.bench_function("evaluate a PLO river holding", |b| {
        b.iter(|| Strength::plo_river(&hole, &board))
    });
}

fn solving_one_river_decision(c: &mut criterion::Criterion) {
    let state = PublicState {
        num_players: 2,
        street: Street::Rive,
        stacks: vec![100.0, 100.0],
        committed_total: vec![5.0, 9.0],
        committed_on_street: vec![0.0, 4.0],
        last_raise_size: 4.0,
        ..PublicState::default()
    };
    let config = SolveConfig {
        cfr_iters: 200,
        river: RiverEvalConfig {
            win_prob: 0.7,
            call_k: 0.5,
        },
        ..SolveConfig::default()
    };
    c.bench_function("solve one river decision", |b| {
        b.iter(|| solve_one(&state, &config))
    });
}

fn solving_one_flop_decision(c: &mut criterion::Criterion) {
    let state = PublicState {
        num_players: 2,
        street: Street::Flop,
        stacks: vec![100.0, 100.0],
        committed_total: vec![5.0, 5.0],
        committed_on_street: vec![0.0, 0.0],
        ..PublicState::default()
    };
    let config = SolveConfig {
        cfr_iters: 200,
        ..SolveConfig::default()
    };
    c.bench_function("solve one flop decision", |b| {
        b.iter(|| solve_one(&state, &config))
    });
}
