// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! glyphgrid CLI entrypoint.
//!
//! Renders a built-in demo scene through the full pipeline (config, style table, bitmap cache,
//! tiled board) and prints the result to stdout. Set `RUST_LOG=debug` to watch tiles and
//! cache traffic on stderr.

use std::error::Error;

use glyphgrid::geo::{DirectedPoint, Direction, Point, Rect, Size};
use glyphgrid::shape::style::{
    LineExtra, RectangleExtra, StraightStrokeDashPattern, StyleTable, TextExtra,
};
use glyphgrid::shape::{
    GroupShape, Line, LineAnchor, LineConnector, RectangleShape, ShapeConnector, TextShape,
};
use glyphgrid::{BitmapManager, EngineConfig, Highlight, MonoBoard, Shape};
use tracing_subscriber::EnvFilter;

const GRID_MARK: char = '·';

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <path>] [--tile-size <n>|<w>x<h>] [--window <l,t,w,h>] \
         [--grid]\n\n\
         --config reads an engine config (JSON); flags override its tile size and window.\n\
         --window clips the board and prints only that area.\n\
         --grid marks empty tile origins with `{GRID_MARK}`."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<String>,
    tile_size: Option<Size>,
    window: Option<Rect>,
    grid: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--tile-size" => {
                if options.tile_size.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.tile_size = Some(parse_tile_size(&raw)?);
            }
            "--window" => {
                if options.window.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.window = Some(parse_window(&raw)?);
            }
            "--grid" => {
                if options.grid {
                    return Err(());
                }
                options.grid = true;
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn parse_tile_size(raw: &str) -> Result<Size, ()> {
    let (width, height) = match raw.split_once('x') {
        Some((width, height)) => (width, height),
        None => (raw, raw),
    };
    let width: i32 = width.trim().parse().map_err(|_| ())?;
    let height: i32 = height.trim().parse().map_err(|_| ())?;
    let size = Size::new(width, height);
    if size.is_empty() {
        return Err(());
    }
    Ok(size)
}

fn parse_window(raw: &str) -> Result<Rect, ()> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<i32>().map_err(|_| ()))
        .collect::<Result<Vec<_>, _>>()?;
    let [left, top, width, height] = values[..] else {
        return Err(());
    };
    if width <= 0 || height <= 0 {
        return Err(());
    }
    Ok(Rect::by_ltwh(left, top, width, height))
}

/// Two boxes joined by lines, a group below them, and a long horizontal line crossing the
/// vertical runs. The `render` box is moved after its connector was recorded, so the attached
/// line end follows it.
fn demo_scene(styles: &StyleTable) -> Vec<Shape> {
    let arrow = LineExtra {
        stroke: Some(styles.stroke_or_default("S1", false)),
        end_anchor: Some(styles.anchor_or_default("A1")),
        ..LineExtra::default()
    };
    let dotted = LineExtra {
        stroke: Some(styles.stroke_or_default("S1", false)),
        start_anchor: Some(styles.anchor_or_default("A5")),
        dash_pattern: StraightStrokeDashPattern::new(1, 1, 0),
        ..LineExtra::default()
    };

    let source = RectangleShape::new("source", Rect::by_ltwh(2, 1, 12, 5)).with_extra(
        RectangleExtra {
            stroke: Some(styles.stroke_or_default("S1", true)),
            ..RectangleExtra::default()
        },
    );
    let bold = TextExtra {
        bound: RectangleExtra {
            stroke: Some(styles.stroke_or_default("S2", false)),
            ..RectangleExtra::default()
        },
        ..TextExtra::default()
    };
    let mut render = TextShape::new("render", Rect::by_ltwh(22, 1, 14, 5))
        .with_text("render")
        .with_extra(bold);

    let mut to_render = Line::new(
        "source-render",
        DirectedPoint::new(Direction::Horizontal, 13, 3),
        DirectedPoint::new(Direction::Horizontal, 21, 3),
    )
    .with_extra(arrow.clone());
    let connector = LineConnector::attach(
        to_render.id().clone(),
        LineAnchor::End,
        to_render.end_point(),
        render.bound(),
    );
    render.set_bound(Rect::by_ltwh(26, 2, 14, 5));
    if let Some(connector) = connector {
        let end = ShapeConnector::point_in_new_bound(
            &connector,
            to_render.direction(connector.anchor),
            render.bound(),
        );
        to_render.move_anchor_point(connector.anchor, end, true, false);
    }

    let board_box = TextShape::new("board", Rect::by_ltwh(10, 11, 16, 5))
        .with_text("tiled board of glyph cells");
    let fill = RectangleShape::new("fill", Rect::by_ltwh(30, 11, 8, 4)).with_extra(
        RectangleExtra { fill: Some(styles.fill_or_default("F3")), ..RectangleExtra::default() },
    );
    let mut group = GroupShape::new("outputs");
    group.add(board_box.into());
    group.add(fill.into());

    let to_board = Line::new(
        "source-board",
        DirectedPoint::new(Direction::Vertical, 7, 5),
        DirectedPoint::new(Direction::Horizontal, 9, 13),
    )
    .with_extra(arrow.clone());
    let to_fill = Line::new(
        "render-fill",
        DirectedPoint::new(Direction::Vertical, 33, 6),
        DirectedPoint::new(Direction::Vertical, 33, 10),
    )
    .with_extra(arrow);
    let crossing = Line::new(
        "crossing",
        DirectedPoint::new(Direction::Horizontal, 0, 8),
        DirectedPoint::new(Direction::Horizontal, 41, 8),
    )
    .with_extra(dotted);

    vec![
        source.into(),
        render.into(),
        group.into(),
        to_render.into(),
        to_board.into(),
        to_fill.into(),
        crossing.into(),
    ]
}

fn scene_bound(shapes: &[Shape]) -> Rect {
    let mut bounds = shapes.iter().map(Shape::bound).filter(|bound| !bound.is_empty());
    let Some(first) = bounds.next() else {
        return Rect::ZERO;
    };
    bounds.fold(first, |acc, bound| {
        Rect::by_ltrb(
            acc.left().min(bound.left()),
            acc.top().min(bound.top()),
            acc.right().max(bound.right()),
            acc.bottom().max(bound.bottom()),
        )
    })
}

/// Marks the origin of every tile inside `bound` that nothing was drawn on.
fn mark_tile_origins(board: &mut MonoBoard, bound: Rect) {
    let tile = board.tile_size();
    let first = board.to_board_address(bound.left(), bound.top());
    let last = board.to_board_address(bound.right(), bound.bottom());
    for row in first.row..=last.row {
        for column in first.column..=last.column {
            let origin = Point::new(column * tile.width, row * tile.height);
            if bound.contains(origin) && board.get(origin.left, origin.top).is_transparent() {
                board.set(origin, GRID_MARK, Highlight::No);
            }
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "glyphgrid".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let mut config = match &options.config_path {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        if let Some(tile_size) = options.tile_size {
            config.tile_size = tile_size;
        }
        if options.window.is_some() {
            config.window = options.window;
        }

        let styles = config.style_table()?;
        let mut board = MonoBoard::with_config(&config)?;
        let mut manager = BitmapManager::new();
        let shapes = demo_scene(&styles);
        for shape in &shapes {
            manager.draw(&mut board, shape, Highlight::No)?;
        }

        let bound = config.window.unwrap_or_else(|| scene_bound(&shapes));
        if options.grid {
            mark_tile_origins(&mut board, bound);
        }
        tracing::debug!(tiles = board.tile_count(), bitmaps = manager.len(), "scene rendered");
        println!("{}", board.to_string_in_bound(bound));
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("glyphgrid: {err}");
        std::process::exit(1);
    }
}
