use crate::model::{Flow, RetrievalContext};
use crate::rubric::{Penalties, RubricWeights};

/// System prompt for the judge model: the Diia Flow Scoring Rubric with
/// the configured weights and penalties interpolated. Ukrainian, like the
/// service itself.
pub(crate) fn system_prompt(weights: &RubricWeights, penalties: &Penalties) -> String {
    format!(
        "Ви є LLM-Judge (Експертний Аудитор), який оцінює якість та GovTech-комплаєнс \
прототипів державних послуг «Дія».

Ви ОБОВ'ЯЗКОВО повертаєте структурований JSON з оцінками (0-100) та текстовим обґрунтуванням.

=== РУБРИКА ОЦІНКИ (Diia Flow Scoring Rubric) ===

1. **Flow Length Score (Вага {flow_length}%)**
   Чи є флоу максимально коротким та ефективним?
   - 100 балів: 3-5 кроків (оптимально для більшості послуг)
   - 90 балів: 6-7 кроків
   - 80 балів: 1-2 кроки (можливо бракує валідації)
   - Нижче: занадто довгий UX
   Штрафувати -{redundant_step} балів за кожен зайвий крок.
   Ідеальний флоу: \"Запит → Підпис (Diia.Signature) → Результат\"

2. **Component Compliance Score (Вага {component_compliance}%)**
   Чи ВСІ використані UI-компоненти є частиною затвердженої Diia Design System?
   Перевіряти за наданим контекстом DiiaComponents.
   Штрафувати -{custom_component} балів за кожен кастомний або неправильно \
використаний компонент.

3. **WCAG Score (Вага {wcag}%)**
   Доступність: контраст, фокус, семантика, мінімум AA.

4. **Screen Saturation Score (Вага {screen_saturation}%)**
   Когнітивне навантаження: не більше 5 полів на екран, без горизонтального скролу.

5. **API Dependency Score (Вага {api_dependency}%)**
   Чи НЕ вимагає флоу ручного введення даних, які доступні автоматично через \
державні реєстри? Перевіряти за контекстом APIMock (доступні поля з реєстрів).
   Штрафувати -{manual_input} балів за кожне поле, яке має бути з API, але \
запитується вручну.

=== ФОРМАТ ВІДПОВІДІ ===

Поверніть ЛИШЕ валідний JSON (без markdown) з полями:
component_compliance_score, component_compliance_justification, component_issues,
flow_length_score, flow_length_justification, redundant_steps,
wcag_score, wcag_justification,
screen_saturation_score, screen_saturation_justification,
api_dependency_score, api_dependency_justification, manual_input_violations,
total_weighted_score, recommendations",
        flow_length = pct(weights.flow_length),
        component_compliance = pct(weights.component_compliance),
        wcag = pct(weights.wcag),
        screen_saturation = pct(weights.screen_saturation),
        api_dependency = pct(weights.api_dependency),
        custom_component = penalties.custom_component,
        redundant_step = penalties.redundant_step,
        manual_input = penalties.manual_input,
    )
}

fn pct(weight: f64) -> String {
    format!("{:.0}", weight * 100.0)
}

/// User prompt: the flow under evaluation plus the retrieved reference
/// context (approved components and registry field availability).
pub(crate) fn user_prompt(flow: &Flow, ctx: Option<&RetrievalContext>) -> String {
    let steps_json =
        serde_json::to_string_pretty(&flow.steps).unwrap_or_else(|_| "[]".to_string());
    let required_apis = flow
        .required_apis
        .iter()
        .map(|a| a.name_ua())
        .collect::<Vec<_>>()
        .join(", ");

    let mut prompt = format!(
        "Оцініть наступний User Flow для державної послуги:

=== FLOW DATA ===
Service: {}
Total Steps: {}

Steps:
{}

Required APIs: {}
",
        flow.name,
        flow.steps.len(),
        steps_json,
        required_apis,
    );

    if let Some(ctx) = ctx {
        if !ctx.components.is_empty() {
            prompt.push_str("\n=== RAG CONTEXT (Diia Design System Components) ===\n");
            for comp in &ctx.components {
                prompt.push_str(&format!(
                    "- {}: {}\n",
                    comp.component_name, comp.usage_context
                ));
            }
        }
        if !ctx.api_mocks.is_empty() {
            prompt.push_str("\n=== Available API Data ===\n");
            for api in &ctx.api_mocks {
                prompt.push_str(&format!(
                    "- {}: {}\n",
                    api.api_name_ua,
                    api.available_fields.join(", ")
                ));
            }
        }
    }

    prompt.push_str("\nОцініть flow та поверніть JSON з оцінками.");
    prompt
}
