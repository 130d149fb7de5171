//! Scene session tests against an in-memory backend.

use std::collections::{BTreeMap, BTreeSet};
use std::f64::consts::PI;

use galaxy_common::{GalaxyError, ParameterSet};

use super::*;
use crate::backend::RenderBackend;
use crate::generator::PointCloud;
use crate::random::RandomSource;

#[derive(Debug, PartialEq, Eq)]
struct Handle(u32);

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Upload(u32, usize),
    Attach(u32),
    Detach(u32),
    Release(u32),
}

#[derive(Default)]
struct RecordingBackend {
    next_id: u32,
    calls: Vec<Call>,
    resident: BTreeSet<u32>,
    scene: BTreeSet<u32>,
    rotations: BTreeMap<u32, f32>,
    fail_uploads: bool,
}

impl RecordingBackend {
    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl RenderBackend for RecordingBackend {
    type Handle = Handle;

    fn upload(&mut self, cloud: &PointCloud, _point_size: f32) -> Result<Handle, GalaxyError> {
        if self.fail_uploads {
            return Err(GalaxyError::Renderer("out of memory".into()));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.calls.push(Call::Upload(id, cloud.len()));
        self.resident.insert(id);
        Ok(Handle(id))
    }

    fn attach(&mut self, handle: &Handle) {
        self.calls.push(Call::Attach(handle.0));
        self.scene.insert(handle.0);
    }

    fn detach(&mut self, handle: &Handle) {
        self.calls.push(Call::Detach(handle.0));
        self.scene.remove(&handle.0);
    }

    fn release(&mut self, handle: Handle) {
        self.calls.push(Call::Release(handle.0));
        assert!(self.resident.remove(&handle.0), "double release");
    }

    fn set_rotation_y(&mut self, handle: &Handle, radians: f32) {
        self.rotations.insert(handle.0, radians);
    }
}

fn small() -> ParameterSet {
    ParameterSet {
        count: 64,
        ..Default::default()
    }
}

fn session() -> SceneSession<RecordingBackend> {
    SceneSession::new(RecordingBackend::default(), RandomSource::seeded(1), small())
}

#[test]
fn starts_empty() {
    let s = session();
    assert_eq!(s.state(), SessionState::Empty);
    assert!(s.backend().calls.is_empty());
    assert_eq!(s.regeneration_count(), 0);
}

#[test]
fn first_regenerate_activates() {
    let mut s = session();
    s.regenerate().unwrap();
    assert_eq!(s.state(), SessionState::Active);
    assert_eq!(
        s.backend().calls,
        vec![Call::Upload(0, 64), Call::Attach(0)]
    );
}

#[test]
fn repeated_regenerations_keep_one_live_cloud() {
    let mut s = session();
    let n = 5;
    for _ in 0..n {
        s.regenerate().unwrap();
    }
    let b = s.backend();
    assert_eq!(b.count(|c| matches!(c, Call::Attach(_))), n);
    assert_eq!(b.count(|c| matches!(c, Call::Release(_))), n - 1);
    assert_eq!(b.resident.len(), 1);
    assert_eq!(b.scene.len(), 1);
    assert_eq!(s.regeneration_count(), n as u64);
}

#[test]
fn old_cloud_released_before_new_upload() {
    let mut s = session();
    s.regenerate().unwrap();
    s.regenerate().unwrap();
    assert_eq!(
        s.backend().calls,
        vec![
            Call::Upload(0, 64),
            Call::Attach(0),
            Call::Detach(0),
            Call::Release(0),
            Call::Upload(1, 64),
            Call::Attach(1),
        ]
    );
}

#[test]
fn invalid_params_keep_current_cloud() {
    let mut s = session();
    s.regenerate().unwrap();
    assert!(s.set_params(ParameterSet {
        branches: 0,
        ..small()
    }));

    let err = s.regenerate().unwrap_err();
    assert!(matches!(err, GalaxyError::InvalidParameter(_)));
    assert_eq!(s.state(), SessionState::Active);
    assert_eq!(s.backend().resident.len(), 1);
    assert_eq!(s.regeneration_count(), 1);
}

#[test]
fn failed_upload_leaves_session_empty() {
    let mut s = session();
    s.regenerate().unwrap();
    s.backend_mut().fail_uploads = true;

    assert!(s.regenerate().is_err());
    assert_eq!(s.state(), SessionState::Empty);
    assert!(s.backend().resident.is_empty());
}

#[test]
fn set_params_reports_changes() {
    let mut s = session();
    assert!(!s.set_params(small()));
    assert!(s.set_params(ParameterSet {
        count: 10,
        ..small()
    }));
    s.regenerate().unwrap();
    assert_eq!(s.backend().calls[0], Call::Upload(0, 10));
}

#[test]
fn apply_changed_params_regenerates_once() {
    let mut s = session();
    s.regenerate().unwrap();
    let before = s.backend().calls.len();

    let regenerated = s
        .apply_params(ParameterSet {
            branches: 5,
            ..small()
        })
        .unwrap();

    assert!(regenerated);
    assert_eq!(
        s.backend().calls[before..],
        [
            Call::Detach(0),
            Call::Release(0),
            Call::Upload(1, 64),
            Call::Attach(1),
        ]
    );
    assert_eq!(s.params().branches, 5);
}

#[test]
fn apply_unchanged_params_does_nothing() {
    let mut s = session();
    s.regenerate().unwrap();
    let before = s.backend().calls.clone();

    assert!(!s.apply_params(small()).unwrap());
    assert_eq!(s.backend().calls, before);
    assert_eq!(s.regeneration_count(), 1);
}

#[test]
fn apply_invalid_params_keeps_current_set() {
    let mut s = session();
    s.regenerate().unwrap();
    let before = s.backend().calls.clone();

    let err = s
        .apply_params(ParameterSet {
            branches: 0,
            ..small()
        })
        .unwrap_err();

    assert!(matches!(err, GalaxyError::InvalidParameter(_)));
    assert_eq!(s.params(), &small());
    assert_eq!(s.backend().calls, before);
    assert_eq!(s.state(), SessionState::Active);
}

#[test]
fn drop_releases_live_cloud() {
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Shared(Rc<RefCell<Vec<Call>>>);

    impl RenderBackend for Shared {
        type Handle = Handle;
        fn upload(&mut self, cloud: &PointCloud, _: f32) -> Result<Handle, GalaxyError> {
            self.0.borrow_mut().push(Call::Upload(0, cloud.len()));
            Ok(Handle(0))
        }
        fn attach(&mut self, h: &Handle) {
            self.0.borrow_mut().push(Call::Attach(h.0));
        }
        fn detach(&mut self, h: &Handle) {
            self.0.borrow_mut().push(Call::Detach(h.0));
        }
        fn release(&mut self, h: Handle) {
            self.0.borrow_mut().push(Call::Release(h.0));
        }
        fn set_rotation_y(&mut self, _: &Handle, _: f32) {}
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut s = SceneSession::new(Shared(log.clone()), RandomSource::seeded(0), small());
        s.regenerate().unwrap();
    }
    assert_eq!(log.borrow().last(), Some(&Call::Release(0)));
}

#[test]
fn clear_returns_to_empty() {
    let mut s = session();
    s.regenerate().unwrap();
    s.clear();
    assert_eq!(s.state(), SessionState::Empty);
    assert!(s.backend().scene.is_empty());
    s.clear();
    assert_eq!(s.backend().count(|c| matches!(c, Call::Release(_))), 1);
}

#[test]
fn tick_rotates_live_cloud() {
    let mut s = session();
    s.regenerate().unwrap();
    let rotation = s.tick(5.0);
    assert!((rotation as f64 - (0.5f64).sin() * PI).abs() < 1e-6);
    assert_eq!(s.backend().rotations.get(&0), Some(&rotation));
}

#[test]
fn tick_while_empty_only_records_rotation() {
    let mut s = session();
    let rotation = s.tick(3.0);
    assert_eq!(s.rotation_y(), rotation);
    assert!(s.backend().rotations.is_empty());

    s.regenerate().unwrap();
    assert_eq!(s.backend().rotations.get(&0), Some(&rotation));
}

#[test]
fn rotation_is_bounded() {
    let mut t = 0.0;
    while t < 200.0 {
        let r = rotation_at(t) as f64;
        assert!((-PI - 1e-6..=PI + 1e-6).contains(&r), "rotation {r} at t={t}");
        t += 0.37;
    }
}

#[test]
fn rotation_is_periodic() {
    assert!((SWAY_PERIOD - 62.831853).abs() < 1e-5);
    for t in [0.0, 1.5, 17.0, 40.25, 100.0] {
        let a = rotation_at(t);
        let b = rotation_at(t + SWAY_PERIOD);
        assert!((a - b).abs() < 1e-4, "t={t}: {a} vs {b}");
    }
}

#[test]
fn rotation_is_frame_rate_independent() {
    // Same absolute time reached through different frame steps.
    let mut coarse = session();
    let mut fine = session();
    for i in 1..=10 {
        coarse.tick(i as f64 * 0.1);
    }
    for i in 1..=100 {
        fine.tick(i as f64 * 0.01);
    }
    assert_eq!(coarse.rotation_y(), fine.rotation_y());
}

#[test]
fn replace_source_changes_sample() {
    let mut s = session();
    s.regenerate().unwrap();
    let _old = s.replace_source(RandomSource::seeded(2));
    s.regenerate().unwrap();
    assert_eq!(s.regeneration_count(), 2);
}
