use super::*;

#[test]
fn price_question_lists_every_language() {
    let school = SchoolInfo::builtin();
    let text = answer(&school, "Сколько стоит английский?");
    for course in &school.languages {
        assert!(text.contains(&course.name), "missing {} in: {text}", course.name);
        assert!(text.contains(&course.price_kzt.to_string()));
    }
}

#[test]
fn schedule_question_returns_schedule_lines() {
    let school = SchoolInfo::builtin();
    let text = answer(&school, "когда занятия");
    assert_eq!(text, school.render_schedule());
    assert!(text.contains("Пн–Ср–Пт 19:00"));
}

#[test]
fn unmatched_question_returns_generic_prompt() {
    let school = SchoolInfo::builtin();
    let text = answer(&school, "расскажи анекдот");
    assert_eq!(text, GENERIC_ANSWER);
}

#[test]
fn price_rule_wins_over_schedule_rule() {
    let school = SchoolInfo::builtin();
    // Both a price and a schedule keyword present — rule order decides.
    let text = answer(&school, "какая цена и какое расписание?");
    assert_eq!(text, school.render_price_list());
}

#[test]
fn course_question_returns_levels() {
    let school = SchoolInfo::builtin();
    let text = answer(&school, "какие языки преподаёте?");
    assert_eq!(text, school.render_courses());
    assert!(text.contains("уровни"));
}

#[test]
fn inflected_language_name_matches_course_rule() {
    let school = SchoolInfo::builtin();
    let text = answer(&school, "хочу заниматься немецким");
    assert_eq!(text, school.render_courses());
}

#[test]
fn format_question_returns_format_description() {
    let school = SchoolInfo::builtin();
    let text = answer(&school, "есть ли занятия онлайн?");
    // "занят" (schedule) outranks the format rule for this phrasing.
    assert_eq!(text, school.render_schedule());

    let text = answer(&school, "можно онлайн?");
    assert_eq!(text, school.render_formats());
}

#[test]
fn matching_is_case_insensitive() {
    let school = SchoolInfo::builtin();
    assert_eq!(answer(&school, "ЦЕНА?"), school.render_price_list());
    assert_eq!(answer(&school, "РАСПИСАНИЕ"), school.render_schedule());
}

#[test]
fn answer_is_deterministic() {
    let school = SchoolInfo::builtin();
    assert_eq!(answer(&school, "прайс"), answer(&school, "прайс"));
}

#[test]
fn language_stem_keeps_at_least_four_chars() {
    assert_eq!(language_stem("Английский"), "английск");
    assert_eq!(language_stem("Немецкий"), "немецк");
    assert_eq!(language_stem("Хинди"), "хинд");
    assert_eq!(language_stem("Чви"), "чви");
}
