//! Pre-written clinical guidance text per (diagnosis, age group), with
//! pronoun substitution by sex. Each age group has its own narrative —
//! the phrasing differs materially, so the templates are separate texts,
//! not one parameterized block.

use tera::{Context, Tera};

use skattning_core::models::profile::{AgeGroup, Diagnosis, Sex};

use crate::error::RecommendError;

/// Subject/object/possessive forms for one pronoun family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounSet {
    pub subject: &'static str,
    pub object: &'static str,
    pub possessive: &'static str,
}

pub fn pronouns(sex: Sex) -> PronounSet {
    match sex {
        Sex::Male => PronounSet {
            subject: "han",
            object: "honom",
            possessive: "hans",
        },
        Sex::Female => PronounSet {
            subject: "hon",
            object: "henne",
            possessive: "hennes",
        },
        Sex::Nonbinary => PronounSet {
            subject: "hen",
            object: "hen",
            possessive: "hens",
        },
    }
}

/// Shown next to the narrative for the autism/child combination: that text
/// is written for children who turn at most four this year.
pub const AUTISM_CHILD_CAVEAT: &str =
    "OBS: texten riktad mot barn som har som mest fyllt 4 år detta år!";

pub fn caveat(diagnosis: Diagnosis, age_group: AgeGroup) -> Option<&'static str> {
    match (diagnosis, age_group) {
        (Diagnosis::Autism | Diagnosis::Both, AgeGroup::Child) => Some(AUTISM_CHILD_CAVEAT),
        _ => None,
    }
}

const ADHD_CHILD: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för ADHD. \
Det innebär att {{ subjekt }} har varaktiga svårigheter med uppmärksamhet, impulskontroll \
och aktivitetsreglering som påverkar vardagen både hemma och i förskola/skola. \
Omgivningen behöver anpassa krav och struktur efter {{ possessiv }} förutsättningar: \
korta och tydliga instruktioner, förutsägbara rutiner och täta pauser. \
Vårdnadshavare erbjuds föräldrautbildning om ADHD, och förskola/skola bör informeras \
så att pedagogiskt stöd kan sättas in tidigt.";

const ADHD_TEEN: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för ADHD. \
I {{ possessiv }} ålder märks svårigheterna framför allt i skolarbetet, i planering av \
vardagen och i sociala sammanhang. Det är viktigt att {{ subjekt }} själv får kunskap om \
vad diagnosen innebär och vilka strategier som hjälper, till exempel planeringsstöd, \
påminnelser och uppdelade arbetsuppgifter. Skolan bör informeras så att anpassningar kan \
göras. Ställningstagande till läkemedelsbehandling görs av läkare tillsammans med \
{{ objekt }} och vårdnadshavare.";

const AUTISM_CHILD: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för autism. \
Det innebär att {{ subjekt }} har en annorlunda utveckling av socialt samspel och \
kommunikation samt begränsade och repetitiva beteendemönster. Tidiga insatser har god \
effekt: remiss till habiliteringen rekommenderas, liksom föräldrautbildning om autism. \
Vardagen bör göras förutsägbar med fasta rutiner och visuellt stöd anpassat efter \
{{ possessiv }} utvecklingsnivå, och förändringar bör förberedas i god tid.";

const AUTISM_TEEN: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för autism. \
För {{ objekt }} innebär det bland annat att socialt samspel och förändringar i vardagen \
kräver mer energi än för jämnåriga, vilket ofta visar sig som uttröttbarhet efter \
skoldagen. Det är viktigt att {{ subjekt }} får hjälp att förstå sin diagnos och att \
kraven i skolan anpassas, till exempel genom tydliga scheman, möjlighet till återhämtning \
och förberedelse inför förändringar. Kontakt med habiliteringen rekommenderas.";

const BOTH_CHILD: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för både ADHD \
och autism. Kombinationen innebär att {{ subjekt }} behöver stöd både för uppmärksamhet \
och aktivitetsreglering och för socialt samspel och behov av förutsägbarhet. \
Insatserna bör samordnas: remiss till habiliteringen, föräldrautbildning samt tydlig \
struktur i förskola/skola anpassad efter {{ possessiv }} förutsättningar. \
Vid stora vardagssvårigheter tas ställning till läkemedelsbehandling för ADHD-symtomen.";

const BOTH_TEEN: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för både ADHD \
och autism. För {{ objekt }} samverkar svårigheterna: bristande uppmärksamhet och \
impulsivitet förstärks när situationen är socialt krävande eller oförutsägbar. \
Det är viktigt att {{ subjekt }} får kunskap om båda diagnoserna och att stödet planeras \
samlat, med anpassningar i skolan, kontakt med habiliteringen och vid behov \
läkemedelsbehandling för ADHD-symtomen efter läkarbedömning.";

const ID_CHILD: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för \
intellektuell funktionsnedsättning. Det innebär att {{ subjekt }} lär sig nya färdigheter \
långsammare än jämnåriga och behöver mer stöd i vardagen. Krav och förväntningar bör \
anpassas efter {{ possessiv }} utvecklingsnivå snarare än åldern. Remiss till \
habiliteringen rekommenderas, och vårdnadshavare bör få information om rätten till stöd \
enligt LSS samt om anpassad pedagogik i förskola/skola.";

const ID_TEEN: &str = "{{ namn }} uppfyller de diagnostiska kriterierna för intellektuell \
funktionsnedsättning. I {{ possessiv }} ålder blir skillnaden mot jämnåriga tydligare i \
skolarbete, abstrakt tänkande och självständighet, och det är viktigt att {{ subjekt }} \
får undervisning och krav anpassade efter sin utvecklingsnivå, till exempel inom anpassad \
skolgång. Kontakt med habiliteringen rekommenderas, liksom information till familjen om \
stöd enligt LSS och om planering inför vuxenlivet.";

/// The raw template for a (diagnosis, age group) pair. `Diagnosis::None`
/// is the no-narrative sentinel.
pub fn template(diagnosis: Diagnosis, age_group: AgeGroup) -> Option<&'static str> {
    let tpl = match (diagnosis, age_group) {
        (Diagnosis::None, _) => return None,
        (Diagnosis::Adhd, AgeGroup::Child) => ADHD_CHILD,
        (Diagnosis::Adhd, AgeGroup::Teen) => ADHD_TEEN,
        (Diagnosis::Autism, AgeGroup::Child) => AUTISM_CHILD,
        (Diagnosis::Autism, AgeGroup::Teen) => AUTISM_TEEN,
        (Diagnosis::Both, AgeGroup::Child) => BOTH_CHILD,
        (Diagnosis::Both, AgeGroup::Teen) => BOTH_TEEN,
        (Diagnosis::IntellectualDisability, AgeGroup::Child) => ID_CHILD,
        (Diagnosis::IntellectualDisability, AgeGroup::Teen) => ID_TEEN,
    };
    Some(tpl)
}

/// Render the narrative for a diagnosis, substituting the patient name and
/// the pronoun family selected by sex. Returns `Ok(None)` for the
/// no-diagnosis sentinel.
pub fn render_narrative(
    diagnosis: Diagnosis,
    age_group: AgeGroup,
    sex: Sex,
    patient_name: &str,
) -> Result<Option<String>, RecommendError> {
    let Some(raw) = template(diagnosis, age_group) else {
        return Ok(None);
    };

    let mut tera = Tera::default();
    tera.add_raw_template("narrative", raw)
        .map_err(|e| RecommendError::TemplateParse(e.to_string()))?;

    let p = pronouns(sex);
    let mut context = Context::new();
    context.insert("namn", patient_name);
    context.insert("subjekt", p.subject);
    context.insert("objekt", p.object);
    context.insert("possessiv", p.possessive);

    let rendered = tera
        .render("narrative", &context)
        .map_err(|e| RecommendError::TemplateRender(e.to_string()))?;
    Ok(Some(rendered))
}
