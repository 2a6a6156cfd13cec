use pagelift::faq::{ContainerStrategy, PairPattern};
use pagelift::{extract, extract_with_diagnostics, Diagnostic, FaqItem, FaqRejection, Options};

/// Enough body copy that the locator keeps the sanitized `<main>` region.
fn body_copy() -> String {
    (1..=7)
        .map(|i| format!("<p>Section {i} of the article has ordinary prose that readers came here for.</p>"))
        .collect()
}

#[test]
fn heading_titled_section_is_extracted_and_excised() {
    let html = format!(
        r#"<html><head><title>Returns</title></head><body><main>{}
        <section>
            <h2>Frequently Asked Questions</h2>
            <h3>How long do refunds take?</h3>
            <p>Refunds reach your card within five working days.</p>
            <h3>Can I exchange a gift?</h3>
            <p>Yes, bring the gift receipt to any store.</p>
        </section>
        </main></body></html>"#,
        body_copy()
    );

    let doc = extract("https://shop.example/returns", &html);

    assert!(doc.faq_data.enabled);
    assert_eq!(
        doc.faq_data.items,
        vec![
            FaqItem::new("How long do refunds take?", "Refunds reach your card within five working days."),
            FaqItem::new("Can I exchange a gift?", "Yes, bring the gift receipt to any store."),
        ]
    );
    assert!(doc.cleaned_html.contains("Section 7 of the article"));
    assert!(!doc.cleaned_html.contains("Frequently Asked Questions"));
    assert!(!doc.cleaned_html.contains("gift receipt"));
}

#[test]
fn details_group_pairs() {
    let html = r#"<div class="help">
        <details><summary>Is there a free trial?</summary><p>Every plan starts with fourteen free days.</p></details>
        <details><summary>Can I cancel anytime?</summary><p>Cancel from the billing page whenever you like.</p></details>
    </div>"#;

    let mut events: Vec<Diagnostic> = Vec::new();
    let doc = extract_with_diagnostics("u", html, &Options::default(), &mut events);

    assert_eq!(
        doc.faq_data.items,
        vec![
            FaqItem::new("Is there a free trial?", "Every plan starts with fourteen free days."),
            FaqItem::new("Can I cancel anytime?", "Cancel from the billing page whenever you like."),
        ]
    );
    assert!(events.contains(&Diagnostic::FaqContainerFound {
        strategy: ContainerStrategy::DetailsGroup
    }));
    assert!(events.contains(&Diagnostic::FaqPatternTried {
        pattern: PairPattern::DetailsSummary,
        candidates: 2,
        accepted: 2,
    }));
    assert!(!doc.cleaned_html.contains("free trial"));
}

#[test]
fn definition_list_pairs() {
    let html = r#"<div class="faq-list"><dl>
        <dt>What sizes are available?</dt><dd>Small, medium and large.</dd><dd>Custom sizes on request.</dd>
        <dt>Where is it made?</dt><dd>In our workshop in Porto.</dd>
    </dl></div>"#;

    let doc = extract("u", html);
    assert_eq!(
        doc.faq_data.items,
        vec![
            FaqItem::new(
                "What sizes are available?",
                "Small, medium and large. Custom sizes on request."
            ),
            FaqItem::new("Where is it made?", "In our workshop in Porto."),
        ]
    );
}

#[test]
fn question_answer_class_pairs() {
    let html = r#"<div class="faq-block">
        <div class="item"><div class="faq-question">Do you offer invoices?</div><div class="faq-answer">Invoices are emailed after every order.</div></div>
        <div class="item"><div class="faq-question">Do you ship abroad?</div><div class="faq-answer">We ship to every EU country.</div></div>
    </div>"#;

    let doc = extract("u", html);
    assert_eq!(
        doc.faq_data.items,
        vec![
            FaqItem::new("Do you offer invoices?", "Invoices are emailed after every order."),
            FaqItem::new("Do you ship abroad?", "We ship to every EU country."),
        ]
    );
}

#[test]
fn accordion_plugin_pairs() {
    let html = r#"<div class="elementor-widget-toggle">
        <div class="toggle">Are pets allowed?</div><div class="toggle-content">Dogs are welcome on the terrace.</div>
        <div class="toggle">Is parking free?</div><div class="toggle-content">Parking is free for hotel guests.</div>
    </div>"#;

    let mut events: Vec<Diagnostic> = Vec::new();
    let doc = extract_with_diagnostics("u", html, &Options::default(), &mut events);

    assert_eq!(
        doc.faq_data.items,
        vec![
            FaqItem::new("Are pets allowed?", "Dogs are welcome on the terrace."),
            FaqItem::new("Is parking free?", "Parking is free for hotel guests."),
        ]
    );
    assert!(events.contains(&Diagnostic::FaqContainerFound {
        strategy: ContainerStrategy::ClassOrId
    }));
}

#[test]
fn entities_and_markup_are_cleaned() {
    let html = r#"<div class="faq"><h3>Salt &amp; pepper?</h3><p>Both are on the table,&nbsp;<em>free</em> of charge.</p></div>"#;
    let doc = extract("u", html);

    assert_eq!(
        doc.faq_data.items,
        vec![FaqItem::new("Salt & pepper?", "Both are on the table, free of charge.")]
    );
}

#[test]
fn out_of_bounds_pairs_are_dropped_not_truncated() {
    let long_answer = "word ".repeat(500);
    let html = format!(
        r#"<div class="faq">
        <h3>Why?</h3><p>Too short a question to keep.</p>
        <h3>What is the long one?</h3><p>{long_answer}</p>
        <h3>What is the good one?</h3><p>This answer fits the bounds.</p>
    </div>"#
    );

    let mut events: Vec<Diagnostic> = Vec::new();
    let doc = extract_with_diagnostics("u", &html, &Options::default(), &mut events);

    assert_eq!(
        doc.faq_data.items,
        vec![FaqItem::new("What is the good one?", "This answer fits the bounds.")]
    );
    assert!(events.iter().any(|e| matches!(
        e,
        Diagnostic::FaqPairRejected {
            reason: FaqRejection::QuestionLength { len: 4, .. },
            ..
        }
    )));
    assert!(events.iter().any(|e| matches!(
        e,
        Diagnostic::FaqPairRejected {
            reason: FaqRejection::AnswerLength { .. },
            ..
        }
    )));
}

#[test]
fn container_outside_main_region_is_still_reported() {
    // The FAQ lives in an aside, outside <main>. It is detected from the raw
    // page, and excision finds nothing to remove from the main region.
    let html = format!(
        r#"<body><main>{}</main><aside><div class="faq"><h3>Where are you based?</h3><p>Our office is in Leeds.</p></div></aside></body>"#,
        body_copy()
    );

    let mut events: Vec<Diagnostic> = Vec::new();
    let doc = extract_with_diagnostics("u", &html, &Options::default(), &mut events);

    assert_eq!(doc.faq_data.items.len(), 1);
    assert!(events.contains(&Diagnostic::FaqExcision { removed: false }));
    assert!(doc.cleaned_html.contains("Section 1 of the article"));
}

#[test]
fn article_wrapper_with_heading_sections_survives_excision() {
    let sections: String = (1..=4)
        .map(|i| {
            format!(
                "<h3>Part {i} heading</h3><p>Part {i} of the story walks through the history of the harbour and the people who built it.</p>"
            )
        })
        .collect();
    let html = format!(
        r#"<body><div class="wrapper">{sections}<div class="faq"><h3>Where are you based?</h3><p>Our office is in Leeds.</p></div></div></body>"#
    );

    let mut events: Vec<Diagnostic> = Vec::new();
    let doc = extract_with_diagnostics("u", &html, &Options::default(), &mut events);

    assert_eq!(
        doc.faq_data.items,
        vec![FaqItem::new("Where are you based?", "Our office is in Leeds.")]
    );
    assert!(!doc.cleaned_html.is_empty());
    for i in 1..=4 {
        assert!(doc.cleaned_html.contains(&format!("Part {i} of the story")), "part {i} lost");
    }
    assert!(!doc.cleaned_html.contains("Our office is in Leeds."));
    assert!(events.contains(&Diagnostic::FaqExcision { removed: true }));
}

#[test]
fn class_matched_faq_is_excised_from_sanitized_main() {
    // The main region comes from the structural pass, which drops the
    // `faq` class. The article sections before it also look like heading
    // groups.
    let html = format!(
        r#"<html><body><main>{}
        <section>
            <h3>Getting there</h3><p>Take the coastal road north and follow the signs for the old mill.</p>
            <h3>Opening hours</h3><p>The mill opens at nine and closes at dusk through the summer.</p>
        </section>
        <div class="faq">
            <h3>Are dogs allowed?</h3><p>Dogs on a lead are welcome in the gardens.</p>
            <h3>Is there a cafe?</h3><p>The cafe by the millpond serves lunch daily.</p>
        </div>
        </main></body></html>"#,
        body_copy()
    );

    let mut events: Vec<Diagnostic> = Vec::new();
    let doc = extract_with_diagnostics("u", &html, &Options::default(), &mut events);

    assert!(events.contains(&Diagnostic::FaqContainerFound {
        strategy: ContainerStrategy::ClassToken
    }));
    assert_eq!(doc.faq_data.items.len(), 2);
    assert!(!doc.cleaned_html.contains("class="), "sanitized region expected");
    assert!(doc.cleaned_html.contains("Section 7 of the article"));
    assert!(doc.cleaned_html.contains("Take the coastal road north"));
    assert!(doc.cleaned_html.contains("closes at dusk"));
    assert!(!doc.cleaned_html.contains("Dogs on a lead"));
    assert!(!doc.cleaned_html.contains("millpond"));
}

#[test]
fn no_faq_on_ordinary_article() {
    let html = format!("<article><h1>News</h1>{}<h2>Background</h2><p>More prose here.</p></article>", body_copy());
    let doc = extract("u", &html);

    assert!(!doc.faq_data.enabled);
    assert!(doc.faq_data.items.is_empty());
}
