use crate::models::CopyRequest;

/// Renders the Two-Step Selling Process instruction prompt. Pure: same request
/// in, same string out, no validation, no panics for any input.
pub fn two_step_selling_prompt(request: &CopyRequest) -> String {
    format!(
        "As an expert copywriter, I need your help in creating a marketing campaign for {}, \
which is a {}. Your task is to use the Two-Step Selling Process formula to craft compelling copy.\n\
Here's the breakdown:\n\
- Inform: {}\n\
- Sell: {}\n\
Do not provide explanations, provide the final marketing copy.",
        request.brand_name, request.description, request.inform_text, request.sell_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_request() -> CopyRequest {
        CopyRequest::new(
            "Acme",
            "posture correctors",
            "Our corrector reduces back pain",
            "Buy now and feel the difference",
        )
    }

    #[test]
    fn substitutes_all_fields_verbatim() {
        let prompt = two_step_selling_prompt(&acme_request());

        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("posture correctors"));
        assert!(prompt.contains("Our corrector reduces back pain"));
        assert!(prompt.contains("Buy now and feel the difference"));
        assert!(prompt.contains("Do not provide explanations"));
        assert!(prompt.contains("Two-Step Selling Process"));
    }

    #[test]
    fn deterministic_for_fixed_input() {
        let request = acme_request();
        assert_eq!(
            two_step_selling_prompt(&request),
            two_step_selling_prompt(&request)
        );
    }

    #[test]
    fn tolerates_empty_fields() {
        let combos = [
            CopyRequest::new("", "", "", ""),
            CopyRequest::new("Acme", "", "", ""),
            CopyRequest::new("", "posture correctors", "", ""),
            CopyRequest::new("", "", "inform", "sell"),
        ];

        for request in &combos {
            let prompt = two_step_selling_prompt(request);
            assert!(prompt.contains("Two-Step Selling Process"));
        }
    }
}
