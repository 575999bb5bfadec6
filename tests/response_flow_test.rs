//! Integration tests for the click-to-score flow
//!
//! These tests drive a full question over a built layout:
//! Layout construction -> pointer clicks -> render instructions -> score.

use std::sync::Arc;
use stimulus_rater::response::{RenderInstruction, ResponseSession, SessionState};
use stimulus_rater::scale::{ScaleGeometry, ScaleLayout};

fn rating_layout() -> Arc<ScaleLayout> {
    let legends: Vec<String> = (1..=7).map(|n| n.to_string()).collect();
    Arc::new(
        ScaleLayout::build(
            7,
            legends,
            vec!["How fast did the object move, on a scale from 1 to 7?".into()],
            800,
        )
        .expect("reference layout"),
    )
}

#[test]
fn test_click_button_five_then_submit_scores_five() {
    let layout = rating_layout();
    let mut session = ResponseSession::new(layout.clone());

    let center = layout.points()[4].center;
    assert_eq!(layout.points()[4].index, 5);

    let out = session.handle_click(center);
    assert_eq!(out, vec![RenderInstruction::Fill { index: 5 }]);

    let out = session.handle_click(layout.submit().center);
    assert!(out.is_empty());
    assert_eq!(session.score(), Some(5));
}

#[test]
fn test_miss_then_button_three_selects_three() {
    let layout = rating_layout();
    let mut session = ResponseSession::new(layout.clone());

    // Click outside every hit-box first
    let out = session.handle_click((450, 250));
    assert!(out.is_empty());
    assert_eq!(session.state(), SessionState::AwaitingFirstSelection);

    let out = session.handle_click(layout.points()[2].center);
    assert_eq!(out, vec![RenderInstruction::Fill { index: 3 }]);
    assert_eq!(session.state(), SessionState::HasSelection);
    assert_eq!(session.selected(), Some(3));
}

#[test]
fn test_correction_sequence_keeps_last_selection() {
    let layout = rating_layout();
    let mut session = ResponseSession::new(layout.clone());

    // The participant changes their mind repeatedly before committing
    for &index in &[1usize, 7, 2, 6] {
        session.handle_click(layout.points()[index - 1].center);
        assert_eq!(session.selected(), Some(index));
    }
    session.handle_click(layout.submit().center);
    assert_eq!(session.score(), Some(6));
}

#[test]
fn test_render_instruction_stream_matches_corrections() {
    let layout = rating_layout();
    let mut session = ResponseSession::new(layout.clone());
    let mut stream = Vec::new();

    stream.extend(session.handle_click(layout.points()[0].center));
    stream.extend(session.handle_click(layout.points()[3].center));
    stream.extend(session.handle_click(layout.points()[3].center)); // re-click: no-op
    stream.extend(session.handle_click(layout.submit().center));

    assert_eq!(
        stream,
        vec![
            RenderInstruction::Fill { index: 1 },
            RenderInstruction::Restore { index: 1 },
            RenderInstruction::Fill { index: 4 },
        ]
    );
}

#[test]
fn test_submit_without_selection_never_commits() {
    let layout = rating_layout();
    let mut session = ResponseSession::new(layout.clone());

    for _ in 0..5 {
        session.handle_click(layout.submit().center);
    }
    assert_eq!(session.state(), SessionState::AwaitingFirstSelection);
    assert_eq!(session.score(), None);
}

#[test]
fn test_sessions_share_one_layout() {
    // One layout is built per batch of questions; sessions only read it
    let legends: Vec<String> = (1..=7).map(|n| n.to_string()).collect();
    let prompts: Vec<String> = (1..=18).map(|i| format!("Questionnaire item {}", i)).collect();
    let layout = Arc::new(ScaleLayout::build(7, legends, prompts, 800).expect("layout"));
    assert_eq!(layout.prompts().len(), 18);

    let mut scores = Vec::new();
    for item in 0..18 {
        let mut session = ResponseSession::new(layout.clone());
        let pick = item % 7;
        session.handle_click(layout.points()[pick].center);
        session.handle_click(layout.submit().center);
        scores.push(session.score().expect("submitted"));
    }

    assert_eq!(scores.len(), 18);
    assert_eq!(scores[0], 1);
    assert_eq!(scores[6], 7);
    assert_eq!(scores[7], 1);
}

#[test]
fn test_custom_geometry_flow() {
    let geometry = ScaleGeometry {
        canvas_width: 1024,
        usable_width: 896,
        button_radius: 20,
        row_y: -60,
        submit_center: (300, -160),
        submit_radius: 20,
    };
    let legends: Vec<String> = (1..=5).map(|n| n.to_string()).collect();
    let layout = Arc::new(
        ScaleLayout::build_with_geometry(5, legends, vec!["Q".into()], &geometry)
            .expect("custom layout"),
    );

    let mut session = ResponseSession::new(layout.clone());
    // Click just inside the larger button box of point 2
    let center = layout.points()[1].center;
    session.handle_click((center.0 + 19, center.1 - 19));
    session.handle_click((300 + 19, -160 + 19));
    assert_eq!(session.score(), Some(2));
}

#[test]
fn test_clicks_after_submit_change_nothing() {
    let layout = rating_layout();
    let mut session = ResponseSession::new(layout.clone());

    session.handle_click(layout.points()[1].center);
    session.handle_click(layout.submit().center);
    let committed = session.score();

    for point in [
        layout.points()[6].center,
        layout.submit().center,
        (0, 0),
    ] {
        assert!(session.handle_click(point).is_empty());
    }
    assert_eq!(session.score(), committed);
    assert_eq!(session.state(), SessionState::Submitted);
}
