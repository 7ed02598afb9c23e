use std::error::Error;
use std::fs::File;

use griddom::{MouseButton, Scene, Size};
use gridview::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::result::Result<(), Box<dyn Error>> {
    // Set up file logging
    let log_file = File::create("gridview-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut scene = Scene::new();
    let options = TableOptions::new(4, 0)
        .columns(vec![
            ColumnDefinition::new("Name").with_width(140.0),
            ColumnDefinition::new("Role"),
            ColumnDefinition::new("Team").with_width(80.0),
        ])
        .row_height(0, 40.0);
    let table = Table::new(&mut scene, options)?;

    table.on_cell_click(|click| println!("cell clicked: row {} column {}", click.row, click.column));
    table.on_column_header_click(|click| println!("column header clicked: {}", click.column));
    table.on_row_header_click(|click| println!("row header clicked: {}", click.row));

    for (row, name) in ["Ada", "Grace", "Linus", "Barbara"].into_iter().enumerate() {
        let label = scene.label(name);
        table.set_cell_content(&mut scene, row, 0, label)?;
    }

    // Pretend the host laid things out and the body shows both scrollbars.
    let body = table.content_area().body_region();
    let horizontal = scene.horizontal_scroller(body)?;
    let vertical = scene.vertical_scroller(body)?;
    scene.set_resolved_size(horizontal, Size::new(320.0, 12.0))?;
    scene.set_resolved_size(vertical, Size::new(12.0, 160.0))?;
    scene.flush_layout()?;
    println!(
        "spacers: header {:?}, row numbers {:?}",
        scene.style(table.header_spacer()).and_then(|s| s.width),
        scene
            .style(table.content_area().spacer())
            .and_then(|s| s.height)
    );

    let header = table.column_header(1)?;
    scene.pointer_move(Some(header.node()))?;
    let lit = table
        .column_cells(1)?
        .iter()
        .filter(|cell| cell.is_highlighted())
        .count();
    println!("hovering column 1 lights {lit} cells");
    scene.pointer_move(None)?;

    scene.click(table.cell(2, 1)?.node(), MouseButton::Left)?;
    scene.click(header.node(), MouseButton::Left)?;
    scene.click(table.row_header(3)?.node(), MouseButton::Left)?;

    scene.wheel(table.cell(1, 1)?.node(), 25.0, 50.0)?;
    println!(
        "after wheel: body {:?}, header {:?}, row numbers {:?}",
        scene.scroll_offset(body)?,
        scene.scroll_offset(table.header_region())?,
        scene.scroll_offset(table.content_area().row_number_region())?
    );

    table.remove_row(&mut scene, 0)?;
    table.add_column(&mut scene, ColumnDefinition::new("Started"))?;
    println!(
        "now {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    Ok(())
}
