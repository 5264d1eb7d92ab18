//! Prompt composition for plan generation and follow-up chat
//!
//! Pure string building: no network or state access.

use shared::FarmProfile;

/// Markers the model is asked to put around the short rundown so it can be
/// split from the full report.
pub const RUNDOWN_START: &str = "--- RUNDOWN ---";
pub const RUNDOWN_END: &str = "--- END RUNDOWN ---";

/// How much of the plan is sent back to the model in a chat turn, in
/// characters (to stay under token limits).
pub const MAX_PLAN_CHARS_FOR_CHAT: usize = 12_000;

/// Compose the plan-generation prompt for a farm profile.
pub fn build_plan_prompt(profile: &FarmProfile) -> String {
    format!(
        r#"Act as an expert Kenyan Agricultural Scientist for smallholder farming across all 47 counties of Kenya in 2026.

CONTEXT:
- Weather forecast: Heavy rains/floods followed by dry spells in 2026.
- Farmer county: {county}
- Farmer local area: {locality}
- Soil type: {soil}
- Currently growing: {crop}

{rundown}

The plan must be grounded in the selected county and relevant to farmers across Kenya's 47 counties.

{style}
"#,
        county = profile.county,
        locality = profile.locality,
        soil = profile.soil_type.label(),
        crop = profile.planted_crop,
        rundown = rundown_instruction(),
        style = plan_style(profile.quick_plan),
    )
}

/// Instruction block asking for the marker-delimited rundown first.
fn rundown_instruction() -> String {
    format!(
        r#"FIRST output a very short RUNDOWN (under 80 words) in this exact format, then a blank line, then the full plan:

{start}
Advisable to grow [crop] now: Yes or No
Current season: [e.g. Short rains / Long rains / Dry]
Best season for [crop]: [e.g. Long rains, March–May]
Tips: • One short tip • Another • One more
{end}

Then continue with the full resilience plan as requested below."#,
        start = RUNDOWN_START,
        end = RUNDOWN_END,
    )
}

/// The requested plan structure: short bullets or the full detailed strategy.
fn plan_style(quick_plan: bool) -> &'static str {
    if quick_plan {
        r#"PROVIDE A SHORT, ACTION-FOCUSED RESILIENCE PLAN with:
- 3–5 bullet points on the main climate risks for the farmer.
- 3–5 bullet points listing specific alternative crops and varieties.
- 3–5 bullet points outlining immediate next steps for the coming weeks.
Keep it clear and practical. Add one short paragraph on how farmers in other Kenyan counties with similar conditions can adapt the same ideas."#
    } else {
        r#"PROVIDE A COMPREHENSIVE RESILIENCE STRATEGY with these sections:

1. **CLIMATE RISK ASSESSMENT**
   - Why is the current crop at risk in 2026 given the forecasted weather?
   - Specific vulnerabilities for the given soil type and local microclimate.

2. **RECOMMENDED PIVOT CROPS (Short-cycle alternatives)**
   - Suggest 3–4 specific crop varieties suitable for the farmer's location and county.
   - Include expected maturity period and yield potential.
   - Explain how each handles flood/drought cycles.

3. **LOCAL SUPPLIER RECOMMENDATIONS**
   - Name 2–3 likely types of agrovets or seed suppliers in the area.
   - What seeds/inputs they typically stock and timeframe to source.

4. **IMPLEMENTATION TIMELINE**
   - Weekly action steps for immediate preparation (Feb–March 2026).
   - Soil preparation for the given soil type and planting schedule aligned with weather.

5. **RISK MITIGATION PRACTICES**
   - Water harvest/conservation, soil amendments, crop insurance or safety nets in Kenya.

Close with a brief note on adapting this plan for other Kenyan counties with different microclimates."#
    }
}

/// Split a raw model response into the rundown block and the full report.
///
/// The end marker is only honoured after the start marker; any other
/// arrangement (missing or out of order) counts as "no rundown" and the
/// input comes back untouched as the report.
pub fn split_rundown(raw: &str) -> (String, String) {
    let Some(start) = raw.find(RUNDOWN_START) else {
        return (String::new(), raw.to_string());
    };
    let after_start = start + RUNDOWN_START.len();
    let Some(end_offset) = raw[after_start..].find(RUNDOWN_END) else {
        return (String::new(), raw.to_string());
    };
    let end = after_start + end_offset;

    let rundown = raw[after_start..end].trim().to_string();
    let full_report = raw[end + RUNDOWN_END.len()..].trim().to_string();
    (rundown, full_report)
}

/// Compose a follow-up prompt: the stored plan (truncated to `max_len`
/// characters) as the only source, then the user's question.
pub fn build_chat_prompt(report: &str, question: &str, max_len: usize) -> String {
    let snippet: String = report.chars().take(max_len).collect();
    format!(
        "Use this resilience plan as the only source. Answer the user's question \
         briefly and practically. If they ask for another report or summary, provide it.\n\n\
         --- PLAN ---\n{snippet}\n--- END PLAN ---\n\nUser question: {question}"
    )
}
