//! Tag rule table
//!
//! Tags are Russian topic labels. Each rule scores +2 per keyword found as a
//! substring of the lowercased text and +1 per pattern match; a tag applies
//! once its score is positive.

use std::sync::OnceLock;

use regex::Regex;

pub const EMOTION_NEGATIVE: &str = "эмоции-негативные";
pub const EMOTION_POSITIVE: &str = "эмоции-позитивные";
pub const BUSINESS: &str = "бизнес";
pub const SALES: &str = "продажи";
pub const GOALS: &str = "цели";
pub const PLANNING: &str = "планирование";
pub const PROGRAMMING: &str = "программирование";
pub const TECHNOLOGY: &str = "технологии";

const KEYWORD_SCORE: usize = 2;

/// One tag with its keyword list and stem patterns
pub struct TagRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub patterns: Vec<Regex>,
}

impl TagRule {
    /// Accumulated score of this tag for `text`
    pub fn score(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        let keyword_score = self
            .keywords
            .iter()
            .filter(|keyword| lower.contains(&keyword.to_lowercase()))
            .count()
            * KEYWORD_SCORE;
        let pattern_score: usize = self
            .patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum();
        keyword_score + pattern_score
    }
}

type RuleSource = (&'static str, &'static [&'static str], [&'static str; 2]);

/// Table order is output order
const RULES: &[RuleSource] = &[
    (
        EMOTION_NEGATIVE,
        &["грустно", "тревога", "страх", "злость", "депрессия", "stress", "anxiety", "sad", "angry", "fear"],
        ["расстрое|злость|страх|тревож|грусть|депресс", "stress|anxiety|sad|angry|fear"],
    ),
    (
        EMOTION_POSITIVE,
        &["радость", "счастье", "восторг", "вдохновение", "мотивация", "happy", "joy", "excited", "inspired"],
        ["рад|счастлив|восторг|вдохнов|мотивиров", "happy|joy|excited|inspired"],
    ),
    (
        "карьера",
        &["работа", "карьера", "собеседование", "зарплата", "повышение", "проект", "career", "job", "promotion", "salary"],
        ["работ|карьер|собеседован|зарплат|повышен|проект", "career|job|promotion|salary|interview"],
    ),
    (
        "обучение",
        &["изучаю", "учусь", "курс", "книга", "навык", "знания", "learning", "study", "skill", "knowledge"],
        ["изуча|учу|курс|книг|навык|знан", "learn|study|skill|knowledge|course"],
    ),
    (
        "отношения-личные",
        &["девушка", "парень", "семья", "родители", "друзья", "отношения", "family", "relationship", "friends"],
        ["девушк|парен|семь|родител|друз|отношен", "family|relationship|friends|partner"],
    ),
    (
        "отношения-конфликт",
        &["ссора", "конфликт", "спор", "разногласия", "недопонимание", "conflict", "argument", "dispute"],
        ["ссор|конфликт|спор|разногласи|недопонима", "conflict|argument|dispute|fight"],
    ),
    (
        BUSINESS,
        &["бизнес", "деньги", "доход", "прибыль", "стартап", "инвестиции", "business", "money", "profit", "startup"],
        ["бизнес|денег|доход|прибыл|стартап|инвестиц", "business|money|profit|startup|investment"],
    ),
    (
        SALES,
        &["продажи", "клиенты", "маркетинг", "реклама", "переговоры", "sales", "marketing", "clients", "advertising"],
        ["продаж|клиент|маркетинг|реклам|переговор", "sales|marketing|clients|advertising|negotiation"],
    ),
    (
        "здоровье",
        &["здоровье", "болезнь", "врач", "лечение", "самочувствие", "health", "doctor", "treatment", "wellness"],
        ["здоров|болезн|врач|лечен|самочувств", "health|doctor|treatment|wellness|medical"],
    ),
    (
        "спорт",
        &["спорт", "тренировка", "фитнес", "бег", "зал", "упражнения", "sport", "training", "fitness", "workout"],
        ["спорт|тренировк|фитнес|бег|зал|упражнен", "sport|training|fitness|workout|exercise"],
    ),
    (
        GOALS,
        &["цель", "план", "достижение", "мечта", "амбиции", "goal", "plan", "achievement", "dream", "ambition"],
        ["цел|план|достижен|мечт|амбиц", "goal|plan|achievement|dream|ambition"],
    ),
    (
        PLANNING,
        &["планирую", "задача", "список", "приоритет", "дедлайн", "planning", "task", "priority", "deadline"],
        ["планиру|задач|список|приоритет|дедлайн", "planning|task|priority|deadline|schedule"],
    ),
    (
        "саморазвитие",
        &["развитие", "рост", "улучшение", "прогресс", "самосовершенствование", "development", "growth", "improvement", "progress"],
        ["развити|рост|улучшен|прогресс|самосовершенствован", "development|growth|improvement|progress|self-improvement"],
    ),
    (
        "рефлексия",
        &["думаю", "размышляю", "анализирую", "понимаю", "осознаю", "thinking", "reflecting", "analyzing", "understanding"],
        ["дума|размышля|анализиру|понима|осозна", "thinking|reflecting|analyzing|understanding|realizing"],
    ),
    (
        PROGRAMMING,
        &["код", "программирование", "разработка", "api", "база данных", "алгоритм", "programming", "development", "coding"],
        ["код|программиров|разработк|api|баз|алгоритм", "programming|development|coding|api|database|algorithm"],
    ),
    (
        TECHNOLOGY,
        &["технология", "софт", "приложение", "система", "платформа", "technology", "software", "application", "system"],
        ["технолог|софт|приложен|систем|платформ", "technology|software|application|system|platform"],
    ),
];

static TAG_RULES: OnceLock<Vec<TagRule>> = OnceLock::new();

/// Compiled tag rules in output order
pub fn tag_rules() -> &'static [TagRule] {
    TAG_RULES.get_or_init(|| {
        RULES
            .iter()
            .map(|&(name, keywords, stems)| TagRule {
                name,
                keywords,
                patterns: stems.iter().map(|stem| stem_pattern(stem)).collect(),
            })
            .collect()
    })
}

/// Case-insensitive match of any stem at a word start, through the end of the word
pub(crate) fn stem_pattern(stems: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\w*", stems)).expect("Invalid tag pattern")
}

/// Tags whose score is positive, in table order
pub fn classify_tags(text: &str) -> Vec<String> {
    tag_rules()
        .iter()
        .filter_map(|rule| {
            let score = rule.score(text);
            if score > 0 {
                tracing::trace!(tag = rule.name, score, "tag scored");
                Some(rule.name.to_string())
            } else {
                None
            }
        })
        .collect()
}
