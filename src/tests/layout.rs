#[cfg(test)]
mod layout {
    use crate::{
        hand::Hand,
        layout::{Constraint, Layout, DEFAULT_SIDE},
        style::ClockStyle,
        tests::recorder::close,
    };

    #[test]
    fn two_hundred_side() {
        let layout = Layout::compute(200.0, &ClockStyle::default());

        assert!(close(layout.radius, 100.0));
        assert!(close(layout.tick_major, 100.0 / 12.0));
        assert!(close(layout.tick_minor, 100.0 / 24.0));
        assert!(close(layout.second, 400.0 / 3.0));
        assert!(close(layout.minute, layout.second * 0.62 * 1.5));
        assert!(close(layout.hour, layout.minute * 0.62));
    }

    #[test]
    fn hands_get_longer() {
        let layout = Layout::compute(200.0, &ClockStyle::default());

        assert!(layout.length(Hand::Hour) < layout.length(Hand::Minute));
        assert!(layout.length(Hand::Minute) < layout.length(Hand::Second));
    }

    #[test]
    fn ratio_is_configurable() {
        let style = ClockStyle {
            ratio: 0.5,
            ..ClockStyle::default()
        };
        let layout = Layout::compute(300.0, &style);

        assert!(close(layout.minute, layout.second * 0.75));
        assert!(close(layout.hour, layout.minute * 0.5));
    }

    #[test]
    fn ticks_alternate() {
        let layout = Layout::compute(120.0, &ClockStyle::default());

        let majors = (0..60).filter(|&i| close(layout.tick(i), layout.tick_major)).count();
        assert_eq!(majors, 12);
        assert!(close(layout.tick(0), 5.0));
        assert!(close(layout.tick(1), 2.5));
    }

    #[test]
    fn degenerate_side_is_all_zero() {
        let style = ClockStyle::default();

        assert_eq!(Layout::compute(0.0, &style), Layout::default());
        assert_eq!(Layout::compute(-40.0, &style), Layout::default());
        assert_eq!(Layout::compute(f32::NAN, &style), Layout::default());
    }

    #[test]
    fn scales_linearly() {
        let style = ClockStyle::default();
        let small = Layout::compute(120.0, &style);
        let large = Layout::compute(300.0, &style);

        assert!(close(large.radius / small.radius, 300.0 / 120.0));
        assert!(close(large.hour / small.hour, 300.0 / 120.0));
    }

    #[test]
    fn measure_defaults_when_wrapping() {
        use crate::layout::measure;

        assert_eq!(measure(Constraint::AtMost(50), Constraint::AtMost(80)), DEFAULT_SIDE);
        assert_eq!(measure(Constraint::Unspecified, Constraint::AtMost(80)), DEFAULT_SIDE);
        assert_eq!(measure(Constraint::Unspecified, Constraint::Unspecified), DEFAULT_SIDE);
    }

    #[test]
    fn measure_takes_smallest() {
        use crate::layout::measure;

        assert_eq!(measure(Constraint::Exactly(300), Constraint::Exactly(120)), 120);
        assert_eq!(measure(Constraint::Exactly(300), Constraint::AtMost(80)), 80);
        assert_eq!(measure(Constraint::AtMost(90), Constraint::Exactly(400)), 90);
        assert_eq!(measure(Constraint::Exactly(64), Constraint::Unspecified), 64);
    }
}
