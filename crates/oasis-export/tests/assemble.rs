mod common;

use common::{at, maria, maria_input, record};
use oasis_export::assemble::{assemble, sections, suggested_filename};
use oasis_export::blocks::{ReportBlock, Unit};
use oasis_instruments::{ClassificationSet, classify_lower_limb};
use oasis_instruments::scoring::{Severity, Tier};

fn document_for(record: &oasis_core::AssessmentRecord) -> oasis_export::blocks::ReportDocument {
    assemble(record, &ClassificationSet::for_record(record), at(10, 30))
}

fn find<'a>(blocks: &'a [ReportBlock], wanted: &str) -> &'a ReportBlock {
    blocks
        .iter()
        .find(|b| match b {
            ReportBlock::LabeledPair { label, .. } | ReportBlock::ClassifiedPair { label, .. } => {
                label == wanted
            }
            _ => false,
        })
        .unwrap_or_else(|| panic!("no block labeled {wanted}"))
}

#[test]
fn sections_appear_in_fixed_order() {
    let doc = document_for(&maria());
    assert_eq!(
        doc.section_titles(),
        [
            sections::PATIENT_DATA,
            sections::ANTHROPOMETRY,
            sections::FUNCTIONAL_TESTS,
        ]
    );
    assert!(doc.blocks[0].is_header());
    assert!(matches!(doc.blocks.last(), Some(ReportBlock::Footer { .. })));
    assert_eq!(doc.blocks.len(), 29);
}

#[test]
fn notes_section_only_when_notes_present() {
    let mut input = maria_input();
    input.notes = Some("Relata dor no joelho direito.\nUsa bengala.".to_string());
    let doc = document_for(&record(input));

    assert_eq!(doc.section_titles().last(), Some(&sections::CLINICAL_NOTES));
    let notes = &doc.blocks[doc.blocks.len() - 2];
    assert_eq!(
        notes,
        &ReportBlock::FreeText {
            text: "Relata dor no joelho direito.\nUsa bengala.".to_string()
        }
    );

    let mut blank = maria_input();
    blank.notes = Some("  \n ".to_string());
    let doc = document_for(&record(blank));
    assert!(!doc.section_titles().contains(&sections::CLINICAL_NOTES));
}

#[test]
fn bmi_block_is_classified_overweight() {
    let doc = document_for(&maria());
    match find(&doc.blocks, "IMC") {
        ReportBlock::ClassifiedPair {
            value,
            unit,
            classification,
            ..
        } => {
            assert_eq!(value, "27.34");
            assert_eq!(*unit, Some(Unit::KilogramsPerSquareMeter));
            assert_eq!(classification.tier, Tier::Overweight);
            assert_eq!(classification.severity, Severity::AttentionNeeded);
        }
        other => panic!("unexpected block {other:?}"),
    }
}

#[test]
fn values_carry_their_units() {
    let doc = document_for(&maria());
    let shown = |label: &str| find(&doc.blocks, label).display_value().unwrap();

    assert_eq!(shown("Estatura"), "160 cm");
    assert_eq!(shown("Massa Corporal"), "70 kg");
    assert_eq!(shown("% Gordura"), "30%");
    assert_eq!(shown("Idade"), "63 anos");
    assert_eq!(shown("Data de Nascimento"), "10/03/1960");
    assert_eq!(shown("Gênero"), "Feminino");
    assert_eq!(shown("1ª Tentativa"), "13 s");
    assert_eq!(shown("Mão Esquerda - 2ª"), "8 kg");
    assert_eq!(shown("Passos"), "350");
    assert_eq!(shown("LAWTON"), "20 pontos");
    assert_eq!(shown("Tempo"), "15 s");
}

#[test]
fn grip_trials_listed_right_hand_first() {
    let doc = document_for(&maria());
    let labels: Vec<_> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            ReportBlock::ClassifiedPair { label, .. } if label.starts_with("Mão") => {
                Some(label.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        [
            "Mão Direita - 1ª",
            "Mão Direita - 2ª",
            "Mão Esquerda - 1ª",
            "Mão Esquerda - 2ª"
        ]
    );
}

#[test]
fn render_time_only_changes_the_footer() {
    let record = maria();
    let classes = ClassificationSet::for_record(&record);
    let morning = assemble(&record, &classes, at(9, 0));
    let evening = assemble(&record, &classes, at(18, 45));

    assert_ne!(morning, evening);
    assert_eq!(morning.content(), evening.content());
    assert_eq!(morning.filename(), evening.filename());
    assert_eq!(evening.generated_at(), Some(at(18, 45)));
}

#[test]
fn filename_uses_name_and_creation_time() {
    let mut input = maria_input();
    input.name = Some("João".to_string());
    let record = record(input);

    assert_eq!(suggested_filename(&record), "avaliacao_João_1700000000000.pdf");
    assert_eq!(document_for(&record).filename(), "avaliacao_João_1700000000000.pdf");
}

#[test]
fn filename_replaces_path_separators() {
    let mut input = maria_input();
    input.name = Some("Ana/Souza".to_string());
    assert_eq!(
        suggested_filename(&record(input)),
        "avaliacao_Ana_Souza_1700000000000.pdf"
    );
}

#[test]
fn unknown_age_shows_dash_and_undefined_lower_limb() {
    let record = maria();
    let mut classes = ClassificationSet::for_record(&record);
    classes.age = None;
    classes.lower_limb = [
        classify_lower_limb(record.lower_limb.first_s, None),
        classify_lower_limb(record.lower_limb.second_s, None),
    ];
    let doc = assemble(&record, &classes, at(10, 0));

    assert_eq!(find(&doc.blocks, "Idade").display_value().unwrap(), "-");
    match find(&doc.blocks, "1ª Tentativa") {
        ReportBlock::ClassifiedPair { classification, .. } => {
            assert_eq!(classification.tier, Tier::Undefined);
            assert_eq!(classification.severity, Severity::AttentionNeeded);
        }
        other => panic!("unexpected block {other:?}"),
    }
}

#[test]
fn notes_are_emitted_as_entered() {
    let mut input = maria_input();
    input.notes = Some("  Evolução:\n    - marcha estável\n".to_string());
    let doc = document_for(&record(input));

    assert!(doc.blocks.contains(&ReportBlock::FreeText {
        text: "  Evolução:\n    - marcha estável\n".to_string()
    }));
}
