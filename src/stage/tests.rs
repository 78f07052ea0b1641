use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use super::{AfterStage, BeforeStage};
use crate::error::TrackError;
use crate::session::Session;

async fn drain(mut rx: mpsc::Receiver<PathBuf>) -> Vec<PathBuf> {
    let mut records = Vec::new();
    while let Some(record) = rx.recv().await {
        records.push(record);
    }
    records
}

#[tokio::test]
async fn test_before_stage_forwards_records_unchanged_in_order() {
    let session = Arc::new(Session::new());
    let (in_tx, in_rx) = mpsc::channel(8);
    let (out_tx, out_rx) = mpsc::channel(8);
    let stage = tokio::spawn(BeforeStage::new(Arc::clone(&session), in_rx, out_tx).run());

    let inputs: Vec<PathBuf> = (0..5)
        .map(|i| PathBuf::from(format!("/src/file{i}.js")))
        .collect();
    for path in inputs.clone() {
        in_tx.send(path).await.unwrap();
    }
    drop(in_tx);

    let outputs = drain(out_rx).await;
    stage.await.unwrap().unwrap();

    assert_eq!(outputs, inputs);
    let expected: Vec<String> = (0..5).map(|i| format!("/src/file{i}.js")).collect();
    assert_eq!(session.before_paths(), expected);
}

#[tokio::test]
async fn test_after_stage_records_patterns_and_forwards() {
    let session = Arc::new(Session::new());
    let (in_tx, in_rx) = mpsc::channel(8);
    let (out_tx, out_rx) = mpsc::channel(8);
    let stage = tokio::spawn(AfterStage::new(Arc::clone(&session), in_rx, out_tx).run());

    in_tx.send(PathBuf::from("/build/a.min.js")).await.unwrap();
    in_tx.send(PathBuf::from("/build/b.min.js")).await.unwrap();
    drop(in_tx);

    let outputs = drain(out_rx).await;
    stage.await.unwrap().unwrap();

    assert_eq!(
        outputs,
        vec![PathBuf::from("/build/a.min.js"), PathBuf::from("/build/b.min.js")]
    );
    assert_eq!(
        session.after_sources(),
        vec![
            r"[/\\]build[/\\]a\.min\.js".to_string(),
            r"[/\\]build[/\\]b\.min\.js".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_tracked_pipeline_end_to_end() {
    let session = Arc::new(Session::new());

    // before stage
    let (before_tx, before_rx) = mpsc::channel::<PathBuf>(8);
    let (transform_tx, mut transform_rx) = mpsc::channel(8);
    let before = tokio::spawn(BeforeStage::new(Arc::clone(&session), before_rx, transform_tx).run());

    // after stage
    let (after_tx, after_rx) = mpsc::channel(8);
    let (sink_tx, sink_rx) = mpsc::channel(8);
    let after = tokio::spawn(AfterStage::new(Arc::clone(&session), after_rx, sink_tx).run());

    // a rename-and-minify transformation between the two stages
    let transformation = tokio::spawn(async move {
        while let Some(path) = transform_rx.recv().await {
            let renamed = path.to_str().unwrap().replace("/src/", "/build/").replace(".js", ".min.js");
            after_tx.send(PathBuf::from(renamed)).await.unwrap();
        }
    });

    for name in ["/src/a.js", "/src/b.js"] {
        before_tx.send(PathBuf::from(name)).await.unwrap();
    }
    drop(before_tx);

    let emitted = drain(sink_rx).await;
    before.await.unwrap().unwrap();
    transformation.await.unwrap();
    after.await.unwrap().unwrap();

    assert_eq!(emitted.len(), 2);
    assert_eq!(
        session.replace("mapped /build/a.min.js and /build/b.min.js"),
        "mapped /src/a.js and /src/b.js"
    );
}

#[tokio::test]
async fn test_closed_downstream_ends_stage_cleanly() {
    let session = Arc::new(Session::new());
    let (in_tx, in_rx) = mpsc::channel(8);
    let (out_tx, out_rx) = mpsc::channel(8);
    drop(out_rx);

    let stage = tokio::spawn(BeforeStage::new(Arc::clone(&session), in_rx, out_tx).run());

    in_tx.send(PathBuf::from("/src/a.js")).await.unwrap();
    in_tx.send(PathBuf::from("/src/b.js")).await.unwrap();
    drop(in_tx);

    // clean shutdown, and whatever was recorded stays queryable
    stage.await.unwrap().unwrap();
    assert_eq!(session.before_paths(), vec!["/src/a.js".to_string()]);
}

#[tokio::test]
async fn test_after_stage_propagates_pattern_failure() {
    let session = Arc::new(Session::new());
    let (in_tx, in_rx) = mpsc::channel(8);
    let (out_tx, mut out_rx) = mpsc::channel::<PathBuf>(8);

    let stage = tokio::spawn(AfterStage::new(Arc::clone(&session), in_rx, out_tx).run());

    in_tx.send(PathBuf::from("/build/[oops.js")).await.unwrap();
    drop(in_tx);

    let err = stage.await.unwrap().unwrap_err();
    assert!(matches!(err, TrackError::Glob { .. }));

    // the failing record was neither recorded nor forwarded
    assert!(session.is_empty());
    assert!(out_rx.recv().await.is_none());
}
