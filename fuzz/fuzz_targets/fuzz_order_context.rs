#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use retro_grouping::{GroupingConfig, Idea, calculate_new_order, plan_drop};

#[derive(Debug, Arbitrary)]
struct RawIdea {
    category: u8,
    group: Option<u8>,
    order: i16,
}

#[derive(Debug, Arbitrary)]
struct Input {
    ideas: Vec<RawIdea>,
    active: u8,
    over: u8,
}

fuzz_target!(|input: Input| {
    if input.ideas.is_empty() || input.ideas.len() > 256 {
        return;
    }

    // Small alphabets so contexts actually collide.
    let ideas: Vec<Idea> = input
        .ideas
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let idea = Idea::new(
                format!("i{i}"),
                format!("c{}", raw.category % 3),
                f64::from(raw.order),
            );
            match raw.group {
                Some(g) => idea.in_group(format!("g{}", g % 4)),
                None => idea,
            }
        })
        .collect();

    let active = &ideas[input.active as usize % ideas.len()];
    let over = &ideas[input.over as usize % ideas.len()];

    // Finite inputs always give a finite order.
    let order = calculate_new_order(active, over, &ideas);
    assert!(order.is_finite(), "non-finite order {order}");

    // Planning must never panic; category mismatches surface as errors.
    let _ = plan_drop(&active.id, &over.id, &ideas, &[], &GroupingConfig::default());
});
