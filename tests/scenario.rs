use std::fs;
use std::path::PathBuf;

use cellworld::{scenario::ScenarioLoader, Position, WorldError};
use tempfile::tempdir;

fn scenario_loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn scenario_path() -> PathBuf {
    PathBuf::from("scenarios/tiny_field.yaml")
}

#[test]
fn scenario_loader_reads_fixture() {
    let loader = scenario_loader();
    let scenario = loader.load(scenario_path()).expect("scenario parses");
    assert_eq!(scenario.name, "tiny_field");
    assert_eq!(scenario.cells.len(), 2);
    assert_eq!(scenario.players.len(), 2);
}

#[test]
fn fixture_builds_valid_world() {
    let loader = scenario_loader();
    let scenario = loader.load(scenario_path()).unwrap();
    let catalog = loader.load_catalog(&scenario).unwrap();
    let world = scenario.build_world();

    assert_eq!(world.cell_count(), 12);
    assert_eq!(world.player_count(), 2);
    assert_eq!(world.validate(Some(&catalog)), Ok(()));

    let summary = world.summary();
    assert_eq!(summary.amount_by_type["water"], 21.5);
    assert_eq!(summary.amount_by_type["stone"], 10.0);

    let ben = world.player(8).unwrap();
    assert_eq!(ben.health, 60.0);
    assert_eq!(ben.breath, 40.0);
    assert_eq!(ben.energy, 4000.0);

    let pond = world.neighbours(Position::new(1.0, 1.0));
    assert_eq!(pond.iter().filter(|c| c.ty == "water").count(), 1);
}

#[test]
fn custom_material_table_is_used() {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join("materials.csv"),
        "name,comment,phase,molar_mass,cold_temp,cold_product,hot_temp,hot_product\n\
         sand,loose grains,solid,,,,1700,glass\n\
         glass,molten sand,liquid,,1700,sand,2230,sand\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("beach.yaml"),
        "name: beach\nmaterials: materials.csv\ncells:\n  - { pos: [0, 0], ty: sand, amount: 3 }\n  - { pos: [1, 0], ty: water, amount: 1 }\n",
    )
    .unwrap();

    let loader = ScenarioLoader::new(temp.path());
    let scenario = loader.load("beach.yaml").unwrap();
    let catalog = loader.load_catalog(&scenario).unwrap();
    assert_eq!(catalog.names(), vec!["glass", "sand"]);

    let world = scenario.build_world();
    assert_eq!(
        world.validate(Some(&catalog)),
        Err(WorldError::UnknownCellType {
            pos: Position::new(1.0, 0.0),
            ty: "water".to_string(),
        })
    );
}

#[test]
fn missing_scenario_reports_path() {
    let temp = tempdir().expect("tempdir");
    let loader = ScenarioLoader::new(temp.path());
    let err = loader.load("absent.yaml").unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn unnamed_scenario_is_rejected() {
    let temp = tempdir().expect("tempdir");
    fs::write(temp.path().join("blank.yaml"), "name: \"  \"\n").unwrap();
    let loader = ScenarioLoader::new(temp.path());
    assert!(loader.load("blank.yaml").is_err());
}
