use glam::IVec2;
use tile_tester::app::CustomTileRegistry;
use tile_tester::core::{capture, clear_from_layers, move_to, resize_tiled};
use tile_tester::render::SwatchRenderer;
use tile_tester::{TileGrid, TileKind, TileRect, TileRef, Viewport};

fn tile(name: &str, color: u32) -> TileRef {
    TileRef::symbolic(TileKind::Shape, name, color)
}

/// Kleine deterministische Zahlenfolge (LCG) für gestreute Testpositionen.
fn scatter(seed: u64, count: usize, span: i32) -> Vec<IVec2> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = ((state >> 33) % (2 * span as u64)) as i32 - span;
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let y = ((state >> 33) % (2 * span as u64)) as i32 - span;
            IVec2::new(x, y)
        })
        .collect()
}

#[test]
fn origin_shift_keeps_logical_positions() {
    let mut grid = TileGrid::new(16, 1);
    let mut viewport = Viewport::default();
    let cells: Vec<IVec2> = scatter(7, 12, 6);
    for (i, &cell) in cells.iter().enumerate() {
        grid.set(0, cell, Some(tile("square", i as u32)));
    }
    let before: Vec<_> = cells.iter().map(|&c| grid.get(0, c).cloned()).collect();

    for target in [IVec2::new(-50, 0), IVec2::new(0, -80), IVec2::new(-200, -200)] {
        assert!(grid.ensure_capacity(target, 3, &mut viewport));
        let after: Vec<_> = cells.iter().map(|&c| grid.get(0, c).cloned()).collect();
        assert_eq!(after, before);
        assert!(grid.check_invariants().is_ok());
    }
}

#[test]
fn at_most_one_entry_per_cell() {
    let mut grid = TileGrid::new(32, 1);
    let cells = scatter(99, 200, 10);
    for (i, &cell) in cells.iter().enumerate() {
        grid.set(0, cell, Some(tile("circle", i as u32)));
    }

    let mut distinct = cells.clone();
    distinct.sort_by_key(|c| (c.y, c.x));
    distinct.dedup();
    assert_eq!(grid.stack().layers()[0].entry_count(), distinct.len());

    // Letzter Schreibzugriff gewinnt
    let last = cells.len() - 1;
    assert_eq!(grid.get(0, cells[last]), Some(&tile("circle", last as u32)));
}

#[test]
fn capture_clear_move_by_zero_restores_everything() {
    let mut grid = TileGrid::new(32, 1);
    let mut viewport = Viewport::default();
    grid.set(0, IVec2::new(-1, -1), Some(tile("square", 0)));
    grid.set(0, IVec2::new(1, 0), Some(tile("circle", 1)));
    grid.stack_mut().add_layer(None);
    grid.set(1, IVec2::new(1, 0), Some(tile("diamond", 2)));
    grid.set(1, IVec2::new(2, 2), Some(tile("triangle", 3)));

    let rect = TileRect::new(IVec2::new(-1, -1), IVec2::new(4, 4));
    let snapshot: Vec<_> = (0..2)
        .map(|layer| {
            rect.cells()
                .map(|c| grid.get(layer, c).cloned())
                .collect::<Vec<_>>()
        })
        .collect();

    let captured = capture(&grid, rect);
    assert_eq!(clear_from_layers(&mut grid, &captured), 4);
    let new_rect = move_to(&mut grid, &mut viewport, &captured, rect.min, 2);

    assert_eq!(new_rect, rect);
    for (layer, expected) in snapshot.iter().enumerate() {
        let actual: Vec<_> = rect.cells().map(|c| grid.get(layer, c).cloned()).collect();
        assert_eq!(&actual, expected);
    }
}

#[test]
fn tiled_resize_covers_every_repeated_cell_and_nothing_outside() {
    let mut grid = TileGrid::new(32, 1);
    let mut viewport = Viewport::default();
    // 3x2 Quelle mit Lücke bei (1, 1)
    let occupied = [
        IVec2::new(0, 0),
        IVec2::new(1, 0),
        IVec2::new(2, 0),
        IVec2::new(0, 1),
        IVec2::new(2, 1),
    ];
    for &cell in &occupied {
        grid.set(0, cell, Some(tile("square", 0)));
    }

    let source = TileRect::new(IVec2::ZERO, IVec2::new(3, 2));
    let captured = capture(&grid, source);
    clear_from_layers(&mut grid, &captured);
    let target = TileRect::new(IVec2::ZERO, IVec2::new(7, 5));
    resize_tiled(&mut grid, &mut viewport, &captured, target, 2);

    for cell in target.cells() {
        let source_cell = IVec2::new(cell.x.rem_euclid(3), cell.y.rem_euclid(2));
        assert_eq!(
            grid.get(0, cell).is_some(),
            occupied.contains(&source_cell),
            "Zelle {cell}"
        );
    }
    let total = grid.stack().layers()[0].entry_count();
    let expected = target
        .cells()
        .filter(|c| occupied.contains(&IVec2::new(c.x.rem_euclid(3), c.y.rem_euclid(2))))
        .count();
    assert_eq!(total, expected);
}

#[test]
fn collision_flattening_is_bit_identical() {
    let renderer = SwatchRenderer::default();
    let mut grid = TileGrid::new(16, 1);
    grid.set(0, IVec2::ZERO, Some(TileRef::symbolic(TileKind::Pattern, "checker", 0)));
    grid.stack_mut().add_layer(None);
    grid.stack_mut().set_opacity(2, 0.5);
    grid.set(1, IVec2::ZERO, Some(TileRef::symbolic(TileKind::Shape, "circle", 3)));

    let captured = capture(&grid, TileRect::new(IVec2::ZERO, IVec2::ONE));
    let mut first = CustomTileRegistry::new();
    let mut second = CustomTileRegistry::new();
    let a = first
        .promote(&captured, None, &renderer, &renderer, 16)
        .map(|t| t.merged_cells.clone())
        .expect("Composite");
    let b = second
        .promote(&captured, None, &renderer, &renderer, 16)
        .map(|t| t.merged_cells.clone())
        .expect("Composite");

    assert_eq!(a.len(), 1);
    assert_eq!(a, b);
    let json_a = serde_json::to_string(&a).expect("serialisierbar");
    let json_b = serde_json::to_string(&b).expect("serialisierbar");
    assert_eq!(json_a, json_b);
}

#[test]
fn layer_stack_is_never_empty() {
    let mut grid = TileGrid::new(8, 1);
    let only = grid.stack().active_layer().id;
    assert!(!grid.stack_mut().remove_layer(only));
    assert_eq!(grid.stack().len(), 1);

    let second = grid.stack_mut().add_layer(None).id;
    assert!(grid.stack_mut().remove_layer(only));
    assert!(!grid.stack_mut().remove_layer(second));
    assert_eq!(grid.stack().len(), 1);
    assert!(grid.check_invariants().is_ok());
}

#[test]
fn place_at_negative_then_move_to_positive() {
    let mut grid = TileGrid::new(4, 1);
    let mut viewport = Viewport::default();
    let a = tile("square", 1);
    let b = tile("circle", 2);

    // Vorhandene Kachel, deren logische Position stabil bleiben muss
    grid.set(0, IVec2::new(1, 1), Some(b.clone()));

    let origin_before = grid.space().origin();
    grid.ensure_capacity(IVec2::new(-3, -3), 0, &mut viewport);
    assert!(grid.set(0, IVec2::new(-3, -3), Some(a.clone())));
    let shift = grid.space().origin() - origin_before;
    assert!(shift.x > 0 && shift.y > 0, "links/oben gewachsen");

    let selection = TileRect::new(IVec2::new(-3, -3), IVec2::ONE);
    let captured = capture(&grid, selection);
    clear_from_layers(&mut grid, &captured);
    let moved = move_to(&mut grid, &mut viewport, &captured, IVec2::new(5, 5), 0);

    assert_eq!(moved, TileRect::new(IVec2::new(5, 5), IVec2::ONE));
    assert!(grid.get(0, IVec2::new(-3, -3)).is_none());
    assert_eq!(grid.get(0, IVec2::new(5, 5)), Some(&a));
    assert_eq!(grid.get(0, IVec2::new(1, 1)), Some(&b));
    // Storage-Position von b ist um genau die Verschiebung gewandert
    let b_storage = grid.to_storage(IVec2::new(1, 1));
    assert_eq!(grid.to_logical(b_storage), IVec2::new(1, 1));
    assert!(grid.check_invariants().is_ok());
}
