//! Report assembly: record + classifications → ordered block list.
//!
//! Fully deterministic. The only input not derived from the record is the
//! render time, which only ever lands in the footer.

use jiff::civil::DateTime;
use oasis_core::AssessmentRecord;
use oasis_core::models::assessment::Hand;
use oasis_instruments::instruments::{grip, six_minute_walk, tug};
use oasis_instruments::scoring::ClassificationResult;
use oasis_instruments::{ClassificationSet, Instrument, LowerLimbStrength};

use crate::blocks::{ReportBlock, ReportDocument, Unit};
use crate::format;

pub mod sections {
    pub const PATIENT_DATA: &str = "DADOS DO PACIENTE";
    pub const ANTHROPOMETRY: &str = "ANTROPOMETRIA";
    pub const FUNCTIONAL_TESTS: &str = "TESTES FUNCIONAIS";
    pub const CLINICAL_NOTES: &str = "OBSERVAÇÕES DO PROFISSIONAL";

    pub const FUNCTIONALITY_SCALES: &str = "Escalas de Funcionalidade";
}

/// `avaliacao_<patient name>_<creation millis>.pdf`.
///
/// Depends only on the record, never on the render time.
pub fn suggested_filename(record: &AssessmentRecord) -> String {
    format!("{}.pdf", file_stem(record))
}

fn file_stem(record: &AssessmentRecord) -> String {
    format!(
        "avaliacao_{}_{}",
        format::file_name_safe(&record.patient.name),
        record.id.created_at_millis()
    )
}

pub fn assemble(
    record: &AssessmentRecord,
    classifications: &ClassificationSet,
    generated_at: DateTime,
) -> ReportDocument {
    let mut out = Blocks::default();

    patient_data(&mut out, record, classifications.age);
    anthropometry(&mut out, record, classifications);
    functional_tests(&mut out, record, classifications);
    if let Some(notes) = record.notes_text() {
        out.section(sections::CLINICAL_NOTES);
        out.0.push(ReportBlock::FreeText {
            text: notes.to_string(),
        });
    }
    out.0.push(ReportBlock::Footer { generated_at });

    ReportDocument {
        assessment_id: record.id,
        file_stem: file_stem(record),
        blocks: out.0,
    }
}

fn patient_data(out: &mut Blocks, record: &AssessmentRecord, age: Option<i32>) {
    let patient = &record.patient;
    out.section(sections::PATIENT_DATA);
    out.text("Nome", &patient.name);
    out.text("Data de Nascimento", &format::date(patient.birth_date));
    match age {
        Some(age) => out.pair("Idade", age.to_string(), Unit::Years),
        None => out.text("Idade", "-"),
    }
    out.text("Gênero", patient.sex.label());
    out.text("Data da Avaliação", &format::date(record.assessment_date));
}

fn anthropometry(out: &mut Blocks, record: &AssessmentRecord, classes: &ClassificationSet) {
    let a = &record.anthropometry;
    out.section(sections::ANTHROPOMETRY);
    out.measure("Estatura", a.height_cm, Unit::Centimeters);
    out.measure("Massa Corporal", a.mass_kg, Unit::Kilograms);
    out.classified("IMC", a.bmi, Unit::KilogramsPerSquareMeter, classes.bmi);
    out.measure("% Gordura", a.body_fat_percent, Unit::Percent);
    out.measure("% Massa Magra", a.lean_mass_percent, Unit::Percent);
}

fn functional_tests(out: &mut Blocks, record: &AssessmentRecord, classes: &ClassificationSet) {
    out.section(sections::FUNCTIONAL_TESTS);

    out.group(LowerLimbStrength.name());
    let trials = [record.lower_limb.first_s, record.lower_limb.second_s];
    for (i, (seconds, class)) in trials.into_iter().zip(classes.lower_limb).enumerate() {
        out.classified(&format!("{}ª Tentativa", i + 1), seconds, Unit::Seconds, class);
    }

    out.group(grip::GripStrength.name());
    for (trial, class) in record.grip.trials().into_iter().zip(classes.grip) {
        let hand = match trial.hand {
            Hand::Right => "Mão Direita",
            Hand::Left => "Mão Esquerda",
        };
        let label = format!("{hand} - {}ª", trial.trial);
        out.classified(&label, trial.kg, Unit::Kilograms, class);
    }

    out.group(six_minute_walk::SixMinuteWalk.name());
    out.0.push(ReportBlock::ClassifiedPair {
        label: "Passos".to_string(),
        value: record.six_minute_walk_steps.to_string(),
        unit: None,
        classification: classes.six_minute_walk,
    });

    out.group(sections::FUNCTIONALITY_SCALES);
    out.points("KATZ", record.katz_points, classes.katz);
    out.points("LAWTON", record.lawton_points, classes.lawton);

    out.group(tug::TimedUpAndGo.name());
    out.classified("Tempo", record.tug_seconds, Unit::Seconds, classes.tug);
}

#[derive(Default)]
struct Blocks(Vec<ReportBlock>);

impl Blocks {
    fn section(&mut self, title: &str) {
        self.0.push(ReportBlock::SectionHeader {
            title: title.to_string(),
        });
    }

    fn group(&mut self, title: &str) {
        self.0.push(ReportBlock::GroupHeader {
            title: title.to_string(),
        });
    }

    fn text(&mut self, label: &str, value: &str) {
        self.0.push(ReportBlock::LabeledPair {
            label: label.to_string(),
            value: value.to_string(),
            unit: None,
        });
    }

    fn pair(&mut self, label: &str, value: String, unit: Unit) {
        self.0.push(ReportBlock::LabeledPair {
            label: label.to_string(),
            value,
            unit: Some(unit),
        });
    }

    fn measure(&mut self, label: &str, value: f64, unit: Unit) {
        self.pair(label, format::number(value), unit);
    }

    fn classified(
        &mut self,
        label: &str,
        value: f64,
        unit: Unit,
        classification: ClassificationResult,
    ) {
        self.0.push(ReportBlock::ClassifiedPair {
            label: label.to_string(),
            value: format::number(value),
            unit: Some(unit),
            classification,
        });
    }

    fn points(&mut self, label: &str, points: u8, classification: ClassificationResult) {
        self.0.push(ReportBlock::ClassifiedPair {
            label: label.to_string(),
            value: points.to_string(),
            unit: Some(Unit::Points),
            classification,
        });
    }
}
