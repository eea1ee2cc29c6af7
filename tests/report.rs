#![forbid(unsafe_code)]
use lineup::{
    model::{
        Assignment, BreakRequirement, ClosingLineup, GenerationOutput, Lineup, MatchQuality,
        ShiftPeriod, Worker, WorkerId,
    },
    render_generation, LineupRenderer, TextLineup,
};

fn assignment(name: &str, position: &str, quality: MatchQuality, rule: BreakRequirement) -> Assignment {
    let worker = Worker::with_id(WorkerId::new(name.to_lowercase()), name);
    let mut a = Assignment::new(&worker, position, quality);
    a.break_rule = rule;
    a
}

fn one_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" | ")
}

#[test]
fn text_lineup_lists_every_assignment() {
    let lineup = Lineup {
        start: 600,
        end: 720,
        period: ShiftPeriod::Morning,
        assignments: vec![
            assignment("Alice", "lead (floating)", MatchQuality::Best, BreakRequirement::Required),
            assignment("Bob", "primary", MatchQuality::Capable, BreakRequirement::None),
            assignment("Carl", "extra/support", MatchQuality::Extra, BreakRequirement::Optional),
        ],
        extra: 1,
    };

    insta::assert_snapshot!(
        one_line(&TextLineup.render_lineup(&lineup)),
        @"10:00-12:00 morning |   lead (floating): Alice (best) [break required] |   primary: Bob (capable) |   extra/support: Carl (extra) [break optional] |   + 1 extra"
    );
}

#[test]
fn closing_block_comes_last() {
    let output = GenerationOutput {
        lineups: vec![Lineup {
            start: 1200,
            end: 1320,
            period: ShiftPeriod::LateNight,
            assignments: vec![assignment("Dee", "fries", MatchQuality::Best, BreakRequirement::None)],
            extra: 0,
        }],
        closing: Some(ClosingLineup {
            start: 1200,
            end: 1320,
            assignments: vec![assignment("Dee", "fries", MatchQuality::Best, BreakRequirement::None)],
        }),
    };

    insta::assert_snapshot!(
        one_line(&render_generation(&output, &TextLineup)),
        @"20:00-22:00 lateNight |   fries: Dee (best) |  | closing 20:00-22:00 |   fries: Dee (best)"
    );
}
