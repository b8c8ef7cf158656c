use jiff::civil::date;
use oasis_core::intake::AssessmentInput;
use oasis_core::models::patient::Sex;
use oasis_core::{AssessmentId, AssessmentRecord};
use oasis_storage::error::StorageError;
use oasis_storage::{AssessmentRepository, InMemoryRepository, JsonFileRepository};

fn record(name: &str, millis: i64) -> AssessmentRecord {
    AssessmentInput {
        name: Some(name.to_string()),
        birth_date: Some(date(1958, 7, 21)),
        sex: Some(Sex::Male),
        assessment_date: Some(date(2024, 6, 3)),
        height_cm: Some(172.0),
        mass_kg: Some(81.5),
        body_fat_percent: Some(24.0),
        lean_mass_percent: Some(70.0),
        lower_limb_first_s: Some(11.2),
        lower_limb_second_s: Some(10.8),
        grip_right_first_kg: Some(34.0),
        grip_right_second_kg: Some(35.5),
        grip_left_first_kg: Some(31.0),
        grip_left_second_kg: Some(32.0),
        six_minute_walk_steps: Some(610),
        katz_points: Some(6),
        lawton_points: Some(27),
        tug_seconds: Some(9.4),
        notes: None,
    }
    .into_record(AssessmentId::from_millis(millis), date(2024, 6, 3))
    .unwrap()
}

fn exercise(repo: &dyn AssessmentRepository) {
    let first = record("Carlos Lima", 1_717_400_000_000);
    let second = record("Ana Souza", 1_717_400_100_000);

    assert!(repo.list().unwrap().is_empty());
    repo.append(first.clone()).unwrap();
    repo.append(second.clone()).unwrap();

    let names: Vec<_> = repo
        .list()
        .unwrap()
        .into_iter()
        .map(|r| r.patient.name)
        .collect();
    assert_eq!(names, ["Carlos Lima", "Ana Souza"]);

    assert!(matches!(
        repo.append(first.clone()),
        Err(StorageError::Duplicate { id }) if id == first.id
    ));
    assert_eq!(repo.get(second.id).unwrap(), second);

    let removed = repo.remove(first.id).unwrap();
    assert_eq!(removed, first);
    assert!(matches!(
        repo.remove(first.id),
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(repo.get(first.id), Err(StorageError::NotFound { .. })));
    assert_eq!(repo.list().unwrap(), [second]);
}

#[test]
fn in_memory_repository_contract() {
    exercise(&InMemoryRepository::new());
}

#[test]
fn json_file_repository_contract() {
    let dir = tempfile::tempdir().unwrap();
    exercise(&JsonFileRepository::new(dir.path().join("assessments.json")));
}

#[test]
fn json_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("assessments.json");
    let stored = record("Carlos Lima", 1_717_400_000_000);

    JsonFileRepository::new(&path).append(stored.clone()).unwrap();

    let reopened = JsonFileRepository::new(&path);
    assert_eq!(reopened.list().unwrap(), [stored]);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 1);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn legacy_array_is_migrated_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.json");
    let legacy = record("Carlos Lima", 1_717_400_000_000);
    std::fs::write(&path, serde_json::to_string(&vec![legacy.clone()]).unwrap()).unwrap();

    let repo = JsonFileRepository::new(&path);
    assert_eq!(repo.list().unwrap(), [legacy.clone()]);

    let added = record("Ana Souza", 1_717_400_100_000);
    repo.append(added.clone()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 1);
    assert_eq!(repo.list().unwrap(), [legacy, added]);
}

#[test]
fn newer_store_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.json");
    std::fs::write(&path, r#"{ "version": 9, "assessments": [] }"#).unwrap();

    assert!(matches!(
        JsonFileRepository::new(&path).list(),
        Err(StorageError::UnsupportedVersion {
            found: 9,
            supported: 1
        })
    ));
}

#[test]
fn corrupt_store_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        JsonFileRepository::new(&path).list(),
        Err(StorageError::Serialization(_))
    ));
}

#[test]
fn browser_form_entries_are_converted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.json");
    let saved = serde_json::json!([{
        "id": "1700000000000",
        "nome": "João Pereira",
        "dataNascimento": "1950-11-02",
        "genero": "masculino",
        "dataAvaliacao": "2024-03-09",
        "estatura": "168",
        "massaCorporal": "74.5",
        "imc": 26.4,
        "percentGordura": "22",
        "percentMassaMagra": "71,5",
        "mmiTentativa1": "15.2",
        "mmiTentativa2": 14.9,
        "preensaoDireita1": "28",
        "preensaoDireita2": "29",
        "preensaoEsquerda1": "26",
        "preensaoEsquerda2": "27",
        "marcha6min": "410",
        "katzPontos": "5",
        "lawtonPontos": 22,
        "tugSegundos": "11.5",
        "observacoes": ""
    }]);
    std::fs::write(&path, saved.to_string()).unwrap();

    let repo = JsonFileRepository::new(&path);
    let records = repo.list().unwrap();
    assert_eq!(records.len(), 1);

    let migrated = &records[0];
    assert_eq!(migrated.id.created_at_millis(), 1_700_000_000_000);
    assert_eq!(migrated.patient.name, "João Pereira");
    assert_eq!(migrated.patient.sex, Sex::Male);
    assert_eq!(migrated.patient.birth_date, date(1950, 11, 2));
    assert_eq!(migrated.anthropometry.lean_mass_percent, 71.5);
    assert!(migrated.bmi_is_consistent());
    assert_eq!(migrated.lower_limb.second_s, 14.9);
    assert_eq!(migrated.six_minute_walk_steps, 410);
    assert_eq!(migrated.katz_points, 5);
    assert_eq!(migrated.lawton_points, 22);
    assert_eq!(migrated.notes, None);

    // Reads before the first write see the same id.
    assert_eq!(repo.list().unwrap()[0].id, migrated.id);
    assert_eq!(repo.get(migrated.id).unwrap().patient.name, "João Pereira");

    repo.append(record("Ana Souza", 1_717_400_100_000)).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 1);
    assert_eq!(raw["assessments"][0]["patient"]["name"], "João Pereira");
    assert_eq!(repo.list().unwrap()[0].id, migrated.id);
}
