#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use gripframe_core::event::{Modifiers, SurfaceInput};
use gripframe_core::geometry::{Point, Rect};
use gripframe_interact::{ContainerBounds, EditingDelegate, InteractionConfig, Manipulator};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    Down(i16, i16),
    Move(i16, i16),
    /// The flag replaces the position with NaN; an up must close the
    /// session regardless of where it lands.
    Up(i16, i16, bool),
    Cancel,
    Pinch(f64, f64),
    Magnify(f64),
    Scroll(f64, u8),
}

impl Step {
    fn input(&self) -> SurfaceInput {
        let at = |x: i16, y: i16| Point::new(f64::from(x) / 4.0, f64::from(y) / 4.0);
        match *self {
            Step::Down(x, y) => SurfaceInput::PointerDown { position: at(x, y) },
            Step::Move(x, y) => SurfaceInput::PointerMoved { position: at(x, y) },
            Step::Up(x, y, lost) => SurfaceInput::PointerUp {
                position: if lost {
                    Point::new(f64::NAN, f64::NAN)
                } else {
                    at(x, y)
                },
            },
            Step::Cancel => SurfaceInput::PointerCancelled,
            Step::Pinch(velocity, scale) => SurfaceInput::Pinch { velocity, scale },
            Step::Magnify(magnification) => SurfaceInput::Magnify { magnification },
            Step::Scroll(delta_y, bits) => SurfaceInput::ScrollResize {
                delta_y,
                modifiers: Modifiers::from_bits_truncate(bits),
            },
        }
    }
}

/// Tracks callback balance across the run.
#[derive(Default)]
struct Balance {
    open: u32,
    /// `edited` flag of the latest `editing_ended`, cleared once a tap
    /// consumes it.
    last_end_edited: Option<bool>,
    bad_tap: bool,
}

impl EditingDelegate for Balance {
    fn editing_began(&mut self) {
        assert_eq!(self.open, 0, "nested editing_began");
        self.open += 1;
    }
    fn editing_ended(&mut self, edited: bool) {
        assert_eq!(self.open, 1, "editing_ended without editing_began");
        self.open -= 1;
        self.last_end_edited = Some(edited);
    }
    fn tapped(&mut self) {
        if self.open != 0 || self.last_end_edited.take() != Some(false) {
            self.bad_tap = true;
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(flags) = u.arbitrary::<u8>() else {
        return;
    };
    let config = InteractionConfig {
        enable_moving: flags & 0b0000_0001 != 0,
        enable_pinch_resizing: flags & 0b0000_0010 != 0,
        enable_drag_resizing: flags & 0b0000_0100 != 0,
        enable_tapping: flags & 0b0000_1000 != 0,
        keep_aspect_ratio: flags & 0b0001_0000 != 0,
        prevents_position_outside_bounds: flags & 0b0010_0000 != 0,
        ..InteractionConfig::default()
    };
    let strict = config.prevents_position_outside_bounds;
    let (min_w, min_h) = (config.min_width, config.min_height);

    let container = Rect::new(0.0, 0.0, 800.0, 600.0);
    let bounds = ContainerBounds::new(container);
    let start = Rect::new(100.0, 100.0, 160.0, 120.0);
    let Ok(mut m) = Manipulator::new(start, config) else {
        return;
    };
    let mut delegate = Balance::default();

    while let Ok(step) = u.arbitrary::<Step>() {
        let was_active = m.is_active();
        m.apply(step.input(), &bounds, &mut delegate);
        if was_active && matches!(step, Step::Up(..) | Step::Cancel) {
            assert!(!m.is_active(), "{step:?} left the session open");
        }

        let frame = m.frame();
        assert!(frame.is_finite(), "non-finite frame {frame:?}");
        assert!(frame.width >= 0.0 && frame.height >= 0.0, "negative extent {frame:?}");
        assert!(
            frame.width >= min_w.min(start.width) && frame.height >= min_h.min(start.height),
            "undersized frame {frame:?}"
        );
        if strict {
            let eps = 1e-6;
            assert!(
                frame.x >= container.x - eps
                    && frame.y >= container.y - eps
                    && frame.max_x() <= container.max_x() + eps
                    && frame.max_y() <= container.max_y() + eps,
                "frame {frame:?} escaped {container:?}"
            );
        }
        assert!(!delegate.bad_tap, "tapped without a preceding unedited end");
        assert_eq!(delegate.open, u32::from(m.is_active()), "callback balance drifted");
    }

    m.force_cancel(&mut delegate);
    assert_eq!(delegate.open, 0);
});
