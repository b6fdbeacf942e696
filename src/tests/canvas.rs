#[cfg(test)]
mod transform {
    use crate::{
        canvas::{Point, Transform},
        tests::recorder::near,
    };

    #[test]
    fn rotation_is_clockwise() {
        let rotation = Transform::rotation(90.0, Point::default());
        assert!(near(rotation.apply(Point::new(0.0, -1.0)), Point::new(1.0, 0.0)));
    }

    #[test]
    fn rotation_keeps_pivot() {
        let pivot = Point::new(40.0, 25.0);
        let rotation = Transform::rotation(137.0, pivot);
        assert!(near(rotation.apply(pivot), pivot));
    }

    #[test]
    fn rotations_compose() {
        let pivot = Point::new(10.0, 10.0);
        let composed = Transform::rotation(30.0, pivot).then(Transform::rotation(60.0, pivot));
        let direct = Transform::rotation(90.0, pivot);

        let point = Point::new(10.0, 0.0);
        assert!(near(composed.apply(point), direct.apply(point)));
        assert!(near(direct.apply(point), Point::new(20.0, 10.0)));
    }
}

#[cfg(test)]
mod raster {
    use crossterm::style::Color;

    use crate::canvas::{Pen, Point, Raster, Surface as _};

    const PEN: Pen = Pen::new(Color::Reset, 1.0);

    #[test]
    fn dimensions_in_cells() {
        let raster = Raster::new(9);
        assert_eq!(raster.width(), 5);
        assert_eq!(raster.height(), 3);
    }

    #[test]
    fn horizontal_line_sets_every_dot() {
        let mut raster = Raster::new(8);
        raster.line(Point::new(0.0, 0.0), Point::new(7.0, 0.0), PEN);

        assert!((0..8).all(|x| raster.get(x, 0)));
        assert!(!raster.get(0, 1));
    }

    #[test]
    fn thick_pen_spreads() {
        let mut raster = Raster::new(8);
        raster.line(Point::new(1.0, 4.0), Point::new(6.0, 4.0), Pen::new(Color::Red, 3.0));

        assert!(raster.get(3, 3));
        assert!(raster.get(3, 5));
        assert!(!raster.get(3, 7));
    }

    #[test]
    fn circle_outline() {
        let mut raster = Raster::new(100);
        raster.circle(Point::new(50.0, 50.0), 20.0, PEN);

        assert!(raster.get(70, 50));
        assert!(raster.get(50, 30));
        assert!(!raster.get(50, 50));
    }

    #[test]
    fn clips_off_surface() {
        let mut raster = Raster::new(10);
        raster.line(Point::new(-10.0, -10.0), Point::new(200.0, 200.0), PEN);

        assert!(raster.get(5, 5));
        assert!(!raster.get(50, 50));
    }

    #[test]
    fn rotation_moves_lines() {
        let mut raster = Raster::new(20);
        raster.save();
        raster.rotate(90.0, Point::new(10.0, 10.0));
        raster.line(Point::new(10.0, 0.0), Point::new(10.0, 5.0), PEN);
        raster.restore();

        assert!(raster.get(18, 10));
        assert!(!raster.get(10, 2));
        assert_eq!(raster.transform(), crate::canvas::Transform::IDENTITY);
    }

    #[test]
    fn rows_render_braille() {
        let mut raster = Raster::new(6);
        assert_eq!(raster.rows(), vec![String::from("   "); 2]);

        raster.line(Point::new(0.0, 0.0), Point::new(1.0, 0.0), PEN);
        let rows = raster.rows();
        assert!(rows[0].contains('\u{2809}'));
        assert!(rows[1].chars().all(|x| x == ' '));

        raster.clear();
        assert!(!raster.get(0, 0));
    }
}
