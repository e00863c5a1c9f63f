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
        classifying_action_line,
        classifying_unrecognized_line,
        reducing_session_log,
        summarizing_session_table,
        fitting_session_regression,
}

/// Synthetic log of `n` six-handed games rotating through 40 players.
fn session(n: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for game in 0..n {
        lines.push(format!("Game ID: {} 0.50/1.00 (PRR) Table (Hold'em)", game));
        let seats = (0..6).map(|s| (game * 7 + s * 13) % 40).collect::<Vec<_>>();
        for (i, p) in seats.iter().enumerate() {
            lines.push(format!("Seat {}: player{} ({}.00)", i + 1, p, 50 + p));
        }
        lines.push(format!("Player player{} has small blind (0.50)", seats[0]));
        lines.push(format!("Player player{} has big blind (1.00)", seats[1]));
        lines.push(String::from("Game started at: 2012/6/1 0:1:40"));
        for (i, p) in seats.iter().enumerate() {
            match (game + i + p) % 4 {
                0 => lines.push(format!("Player player{} raises ({}.00)", p, 2 + i)),
                1 => lines.push(format!("Player player{} calls (3.00)", p)),
                _ => lines.push(format!("Player player{} folds", p)),
            }
        }
        lines.push(String::from("*** FLOP ***: [Qs 4d 9c]"));
        for (i, p) in seats.iter().enumerate().filter(|(_, p)| (game + **p) % 3 == 0) {
            match (game * i + p) % 3 {
                0 => lines.push(format!("Player player{} bets ({}.00)", p, 4 + i)),
                1 => lines.push(format!("Player player{} raises ({}.00)", p, 8 + i)),
                _ => lines.push(format!("Player player{} calls", p)),
            }
        }
        lines.push(format!("player{}: nice hand", seats[2]));
        for (i, p) in seats.iter().enumerate() {
            match i == game % 6 {
                true => lines.push(format!("Player player{} shows: pair. Wins: {}.00", p, 5 + i)),
                false => lines.push(format!("Player player{} mucks cards. Loses: {}.50", p, i)),
            }
        }
    }
    lines
}

fn classifying_action_line(c: &mut criterion::Criterion) {
    c.bench_function("classify an action line", |b| {
        b.iter(|| Event::from(criterion::black_box("Player alice raises (6.00)")))
    });
}

fn classifying_unrecognized_line(c: &mut criterion::Criterion) {
    c.bench_function("classify an unrecognized line", |b| {
        b.iter(|| Event::from(criterion::black_box("alice: good luck everyone, have fun")))
    });
}

fn reducing_session_log(c: &mut criterion::Criterion) {
    let lines = session(1000);
    c.bench_function("reduce a 1000-game log", |b| {
        b.iter(|| Table::from_lines(lines.iter()))
    });
}

fn summarizing_session_table(c: &mut criterion::Criterion) {
    let table = Table::from_lines(session(1000).iter());
    c.bench_function("summarize a 1000-game table", |b| {
        b.iter(|| Summary::from_table(&table, MIN_HANDS))
    });
}

fn fitting_session_regression(c: &mut criterion::Criterion) {
    let summary = Summary::from_table(&Table::from_lines(session(1000).iter()), MIN_HANDS);
    c.bench_function("fit OLS over session profiles", |b| {
        b.iter(|| summary.fit())
    });
}

use handlog::MIN_HANDS;
use handlog::parse::Event;
use handlog::stats::Summary;
use handlog::table::Table;
