use std::collections::HashSet;

use crate::sched::Replay;

fn run_to_string(input: &str) -> (String, crate::stats::RunStats) {
    let mut out = Vec::new();
    let stats = Replay::run(input.as_bytes(), &mut out).expect("replay");
    (String::from_utf8(out).expect("utf8 output"), stats)
}

#[test]
fn backlogged_flow_replays_in_arrival_order() {
    // One flow, packets at t=0 and t=5, length 10: tags 10 and 15, second
    // start = max(5, 10) = 10.
    let input = "0 a 1 b 2 10\n5 a 1 b 2 10\n";
    let (out, stats) = run_to_string(input);
    assert_eq!(out, "0: 0 a 1 b 2 10\n10: 5 a 1 b 2 10\n");
    assert_eq!(stats.flows, 1);
    assert_eq!(stats.dispatched_pkts, 2);
    assert_eq!(stats.makespan, 20);
}

#[test]
fn heavier_flow_preempts_the_schedule_slot() {
    // Flow a (weight 1) and flow c (weight 2), length 20 each at t=0:
    // tags 20 and 10, so flow c transmits first.
    let input = "0 a 1 b 2 20\n0 c 3 d 4 20 2\n";
    let (out, _) = run_to_string(input);
    assert_eq!(out, "0: 0 c 3 d 4 20 2\n20: 0 a 1 b 2 20\n");
}

#[test]
fn equal_tags_emit_in_flow_discovery_order() {
    // Same length and weight, both at t=0: tags tie at 10, and the flow
    // seen first in the trace wins.
    let input = "0 x 1 y 2 10\n0 p 3 q 4 10\n";
    let (out, _) = run_to_string(input);
    assert_eq!(out, "0: 0 x 1 y 2 10\n10: 0 p 3 q 4 10\n");
}

#[test]
fn gap_in_the_trace_fast_forwards_the_clock() {
    let input = "0 a 1 b 2 10\n100 a 1 b 2 10\n";
    let (out, stats) = run_to_string(input);
    assert_eq!(out, "0: 0 a 1 b 2 10\n100: 100 a 1 b 2 10\n");
    assert_eq!(stats.makespan, 110);
}

#[test]
fn malformed_lines_leave_no_trace_in_the_output() {
    let input = "0 a 1 b 2 10\n10 a 1\nnot a record\n5 c 3 d 4 10\n";
    let (out, stats) = run_to_string(input);

    assert_eq!(stats.accepted_pkts, 2);
    assert_eq!(stats.skipped_lines, 2);
    assert_eq!(stats.flows, 2);

    let emitted: HashSet<&str> = out
        .lines()
        .map(|l| l.split_once(": ").expect("start prefix").1)
        .collect();
    let accepted: HashSet<&str> = ["0 a 1 b 2 10", "5 c 3 d 4 10"].into_iter().collect();
    assert_eq!(emitted, accepted);
}

#[test]
fn every_accepted_record_is_emitted_exactly_once() {
    let input = "\
0 a 1 b 2 10\n\
1 c 3 d 4 5 2\n\
2 a 1 b 2 8\n\
2 e 5 f 6 3\n\
50 c 3 d 4 7\n";
    let (out, stats) = run_to_string(input);

    let mut emitted: Vec<&str> = out
        .lines()
        .map(|l| l.split_once(": ").expect("start prefix").1)
        .collect();
    emitted.sort_unstable();
    let mut accepted: Vec<&str> = input.lines().collect();
    accepted.sort_unstable();

    assert_eq!(emitted, accepted);
    assert_eq!(stats.dispatched_pkts, 5);
}

#[test]
fn weight_overwrite_only_affects_later_packets() {
    // First packet at weight 1 gets tag 10; the second record raises the
    // weight to 5, so its tag is 10 + 10/5 = 12.
    let input = "0 a 1 b 2 10\n0 a 1 b 2 10 5\n";
    let (out, stats) = run_to_string(input);
    assert_eq!(out, "0: 0 a 1 b 2 10\n10: 0 a 1 b 2 10 5\n");
    assert_eq!(stats.per_flow[0].last_finish, 12.0);
    assert_eq!(stats.per_flow[0].weight, 5);
}

#[test]
fn negative_weight_from_input_is_normalized() {
    // Weight -3 must behave as weight 1, not divide by a negative.
    let input = "0 a 1 b 2 10 -3\n";
    let (_, stats) = run_to_string(input);
    assert_eq!(stats.per_flow[0].weight, 1);
    assert_eq!(stats.per_flow[0].last_finish, 10.0);
}

#[test]
fn empty_input_is_a_successful_empty_run() {
    let (out, stats) = run_to_string("");
    assert!(out.is_empty());
    assert_eq!(stats.flows, 0);
    assert_eq!(stats.accepted_pkts, 0);
    assert_eq!(stats.dispatched_pkts, 0);
    assert_eq!(stats.makespan, 0);
}

#[test]
fn replay_is_deterministic() {
    let input = "\
0 a 1 b 2 10\n\
0 c 3 d 4 10 2\n\
3 a 1 b 2 4\n\
90 e 5 f 6 1\n";
    let (first, _) = run_to_string(input);
    let (second, _) = run_to_string(input);
    assert_eq!(first, second);
}

#[test]
fn per_flow_stats_account_for_every_byte() {
    let input = "0 a 1 b 2 10\n1 a 1 b 2 20\n2 c 3 d 4 5\n";
    let (_, stats) = run_to_string(input);

    assert_eq!(stats.total_bytes, 35);
    assert_eq!(stats.per_flow.len(), 2);
    assert_eq!(stats.per_flow[0].packets, 2);
    assert_eq!(stats.per_flow[0].bytes, 30);
    assert_eq!(stats.per_flow[1].packets, 1);
    assert_eq!(stats.per_flow[1].bytes, 5);
}
