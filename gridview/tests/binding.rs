use griddom::{NodeId, Scene};
use gridview::prelude::*;

#[derive(Debug, Clone)]
struct Person {
    name: &'static str,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person {
            name: "Ada",
            age: 36,
        },
        Person {
            name: "Bob",
            age: 41,
        },
    ]
}

fn bound_table(scene: &mut Scene) -> BoundTable<Person> {
    let mut bound = BoundTable::with_defaults(scene).unwrap();
    bound
        .add_column(
            scene,
            ColumnBinder::bound(ColumnDefinition::new("Name"), |scene: &mut Scene, p: &Person| {
                scene.label(p.name)
            }),
        )
        .unwrap();
    bound
        .add_column(
            scene,
            ColumnBinder::bound(
                ColumnDefinition::new("Age").with_width(60.0),
                |scene: &mut Scene, p: &Person| scene.label(p.age.to_string()),
            ),
        )
        .unwrap();
    bound
}

fn cell_text(scene: &Scene, table: &Table, row: usize, column: usize) -> Option<String> {
    let cell = table.cell(row, column).ok()?;
    let content: NodeId = *cell.content(scene).first()?;
    scene.text(content).map(str::to_string)
}

#[test]
fn test_set_data_builds_one_row_per_record() {
    let mut scene = Scene::new();
    let mut bound = bound_table(&mut scene);

    bound.set_data(&mut scene, people()).unwrap();

    let table = bound.table();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 2);
    assert_eq!(bound.data().len(), 2);
    assert_eq!(cell_text(&scene, table, 0, 0).as_deref(), Some("Ada"));
    assert_eq!(cell_text(&scene, table, 1, 1).as_deref(), Some("41"));
    assert!(!table.includes_row_numbers());
}

#[test]
fn test_refresh_replaces_previous_rows() {
    let mut scene = Scene::new();
    let mut bound = bound_table(&mut scene);
    bound.set_data(&mut scene, people()).unwrap();
    let stale = bound.table().cell(0, 0).unwrap().node();

    bound
        .set_data(
            &mut scene,
            vec![Person {
                name: "Cy",
                age: 7,
            }],
        )
        .unwrap();

    let table = bound.table();
    assert_eq!(table.row_count(), 1);
    assert!(!scene.contains(stale));
    assert_eq!(cell_text(&scene, table, 0, 0).as_deref(), Some("Cy"));
    assert_eq!(table.row_header(0).unwrap().label(&scene), Some("1"));
}

#[test]
fn test_refresh_with_empty_data_clears_rows() {
    let mut scene = Scene::new();
    let mut bound = bound_table(&mut scene);
    bound.set_data(&mut scene, people()).unwrap();

    bound.set_data(&mut scene, Vec::new()).unwrap();

    assert_eq!(bound.table().row_count(), 0);
    assert_eq!(bound.table().column_count(), 2);
}

#[test]
fn test_binder_requires_definition_and_factory() {
    let mut scene = Scene::new();
    let mut bound: BoundTable<Person> = BoundTable::with_defaults(&mut scene).unwrap();

    let missing_factory = ColumnBinder::new().definition(ColumnDefinition::new("Name"));
    let missing_definition =
        ColumnBinder::new().factory(|scene: &mut Scene, p: &Person| scene.label(p.name));

    assert!(matches!(
        bound.add_column(&mut scene, missing_factory).unwrap_err(),
        TableError::InvalidArgument(_)
    ));
    assert!(matches!(
        bound.add_column(&mut scene, missing_definition).unwrap_err(),
        TableError::InvalidArgument(_)
    ));
    assert_eq!(bound.table().column_count(), 0);
}

#[test]
fn test_options_rows_and_columns_are_ignored() {
    let mut scene = Scene::new();
    let options = TableOptions::new(4, 3).flexible_row_heights(true);
    let bound: BoundTable<Person> = BoundTable::new(&mut scene, options).unwrap();

    assert_eq!(bound.table().row_count(), 0);
    assert_eq!(bound.table().column_count(), 0);
    assert!(bound.table().flexible_row_heights());
    assert!(bound.table().includes_row_numbers());
}
