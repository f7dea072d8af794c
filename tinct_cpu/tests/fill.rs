// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for solid fills, linear ramps and custom column work.

use crate::util::{get_pixmap, multi_threaded, rgba, single_threaded, RED, WHITE};
use tinct_cpu::{parse_hex_color, Error, GradientOrientation, Pixmap};

#[test]
fn fill_overwrites_everything() {
    let mut pixmap = get_pixmap(9, 4, None);
    let color = parse_hex_color("#0f8").unwrap();

    single_threaded().fill(&mut pixmap, color);

    assert_eq!(color, rgba(0, 255, 136, 255));
    assert!(pixmap.data().iter().all(|pixel| *pixel == color));
}

#[test]
fn fill_gradient_horizontal() {
    let black = rgba(0, 0, 0, 255);
    let mut pixmap = get_pixmap(4, 3, None);

    multi_threaded(2)
        .fill_gradient(&mut pixmap, black, WHITE, GradientOrientation::Horizontal)
        .unwrap();

    for y in 0..3 {
        let row: Vec<u8> = (0..4).map(|x| pixmap.sample(x, y).r).collect();
        assert_eq!(row, [0, 64, 128, 191], "row {y}");
        assert!((0..4).all(|x| pixmap.sample(x, y).a == 255));
    }
}

#[test]
fn fill_gradient_vertical() {
    let blue = rgba(0, 0, 255, 255);
    let mut pixmap = Pixmap::new(2, 3);

    single_threaded()
        .fill_gradient(&mut pixmap, RED, blue, GradientOrientation::Vertical)
        .unwrap();

    for x in 0..2 {
        assert_eq!(pixmap.sample(x, 0), RED);
        assert_eq!(pixmap.sample(x, 1), rgba(170, 0, 85, 255));
        assert_eq!(pixmap.sample(x, 2), rgba(85, 0, 170, 255));
    }
}

#[test]
fn fill_gradient_parallel_matches_single_threaded() {
    let from = rgba(10, 20, 30, 40);
    let to = rgba(250, 128, 0, 255);

    for orientation in [GradientOrientation::Horizontal, GradientOrientation::Vertical] {
        let mut expected = Pixmap::new(37, 21);
        let mut actual = Pixmap::new(37, 21);

        single_threaded()
            .fill_gradient(&mut expected, from, to, orientation)
            .unwrap();
        multi_threaded(5)
            .fill_gradient(&mut actual, from, to, orientation)
            .unwrap();

        assert_eq!(actual, expected, "{orientation:?}");
    }
}

#[test]
fn fill_gradient_small_pixmaps() {
    let ctx = single_threaded();

    let mut empty = Pixmap::new(0, 3);
    ctx.fill_gradient(&mut empty, RED, WHITE, GradientOrientation::Vertical)
        .unwrap();
    assert!(empty.is_empty());

    let mut single = get_pixmap(1, 1, None);
    ctx.fill_gradient(&mut single, RED, WHITE, GradientOrientation::Horizontal)
        .unwrap();
    assert_eq!(single.data(), &[RED]);
}

#[test]
fn render_columns_visits_every_pixel() {
    for ctx in [single_threaded(), multi_threaded(3)] {
        let mut pixmap = Pixmap::new(20, 7);

        ctx.render_columns(&mut pixmap, |column| {
            let x = u8::try_from(column.x()).unwrap();
            for (y, pixel) in column.rows_mut() {
                *pixel = rgba(x, u8::try_from(y).unwrap(), 0, 255);
            }
        })
        .unwrap();

        for y in 0..7_u8 {
            for x in 0..20_u8 {
                assert_eq!(
                    pixmap.sample(x.into(), y.into()),
                    rgba(x, y, 0, 255),
                    "{} threads",
                    ctx.num_threads()
                );
            }
        }
    }
}

#[test]
fn render_columns_reports_failure() {
    for ctx in [single_threaded(), multi_threaded(4)] {
        let mut pixmap = get_pixmap(5, 2, Some(WHITE));

        let err = ctx
            .render_columns(&mut pixmap, |column| {
                assert_ne!(column.x(), 2, "bad column");
                for (_, pixel) in column.rows_mut() {
                    *pixel = RED;
                }
            })
            .unwrap_err();

        match err {
            Error::WorkerFailure { column, message } => {
                assert_eq!(column, 2);
                assert!(message.contains("bad column"), "{message}");
            }
            other => panic!("expected a worker failure, got {other:?}"),
        }

        // Every other column still got rendered.
        for y in 0..2 {
            for x in 0..5 {
                let expected = if x == 2 { WHITE } else { RED };
                assert_eq!(pixmap.sample(x, y), expected);
            }
        }
    }
}
