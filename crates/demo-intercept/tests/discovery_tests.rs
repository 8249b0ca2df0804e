use demo_intercept::{DiscoveryLoop, Interceptor, ScanReport, TaskWidget, MIN_POLL_INTERVAL};
use demo_test_utils::{compute_stats_jobs, FakeDocument, FakeWidget, ScriptedPrompt};
use std::sync::Arc;
use std::time::Duration;

fn discovery(document: Arc<FakeDocument>) -> DiscoveryLoop {
    let interceptor = Interceptor::new(Arc::new(compute_stats_jobs()), ScriptedPrompt::answering(false));
    DiscoveryLoop::new(document, interceptor)
}

#[test]
fn test_scan_wraps_each_widget_once() {
    let document = FakeDocument::new();
    let first = FakeWidget::new("ComputeStats").shared();
    let second = FakeWidget::new("Cluster").shared();
    document.add_widget(first.as_task_widget());
    document.add_widget(second.as_task_widget());

    let discovery = discovery(document);
    assert_eq!(
        discovery.scan_once(),
        ScanReport { containers: 2, resolved: 2, wrapped: 2 }
    );
    assert_eq!(
        discovery.scan_once(),
        ScanReport { containers: 2, resolved: 2, wrapped: 0 }
    );
    assert!(first.submit_slot().is_intercepted());
    assert!(second.submit_slot().is_intercepted());
}

#[test]
fn test_unbound_container_picked_up_later() {
    let document = FakeDocument::new();
    let container = document.add_unbound();
    let discovery = discovery(document.clone());

    assert_eq!(
        discovery.scan_once(),
        ScanReport { containers: 1, resolved: 0, wrapped: 0 }
    );

    let widget = FakeWidget::new("ComputeStats").shared();
    document.bind(&container, widget.as_task_widget());
    assert_eq!(discovery.scan_once().wrapped, 1);
    assert!(widget.submit_slot().is_intercepted());
}

#[test]
fn test_default_period() {
    let discovery = discovery(FakeDocument::new());
    assert_eq!(discovery.period(), Duration::from_millis(1000));
    assert_eq!(
        discovery.with_period(Duration::from_millis(250)).period(),
        Duration::from_millis(250)
    );
}

#[test]
fn test_zero_period_clamped() {
    let discovery = discovery(FakeDocument::new()).with_period(Duration::ZERO);
    assert_eq!(discovery.period(), MIN_POLL_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_zero_period_loop_keeps_running() {
    let document = FakeDocument::new();
    let handle = discovery(document.clone())
        .with_period(Duration::ZERO)
        .spawn();

    let widget = FakeWidget::new("ComputeStats").shared();
    document.add_widget(widget.as_task_widget());
    tokio::time::sleep(Duration::from_millis(5)).await;

    assert!(widget.submit_slot().is_intercepted());
    assert!(!handle.is_finished());
    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_loop_scans_every_period() {
    let document = FakeDocument::new();
    let handle = discovery(document.clone())
        .with_period(Duration::from_millis(100))
        .spawn();

    let widget = FakeWidget::new("ComputeStats").shared();
    document.add_widget(widget.as_task_widget());

    // first scan happens one period after start
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!widget.submit_slot().is_intercepted());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(widget.submit_slot().is_intercepted());

    let late = FakeWidget::new("Cluster").shared();
    document.add_widget(late.as_task_widget());
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(late.submit_slot().is_intercepted());

    assert!(!handle.is_finished());
    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_loop_wrapped_widget_behaves() {
    let document = FakeDocument::new();
    let widget = FakeWidget::new("ComputeStats")
        .with_file("input.file", "/tmp/abc/sample.csv")
        .shared();
    document.add_widget(widget.as_task_widget());

    let handle = discovery(document).spawn();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    widget.click_run().unwrap();
    assert_eq!(widget.real_submits(), 0);
    assert_eq!(widget.views().len(), 1);
    handle.abort();
}
