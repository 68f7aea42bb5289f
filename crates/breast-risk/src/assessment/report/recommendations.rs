use super::super::profile::UserProfile;
use super::super::scoring::RiskCategory;

const TEENAGER: &[&str] = &[
    "Learn what your breasts normally look and feel like so you can notice changes early",
    "Build a habit of at least 60 minutes of physical activity every day",
    "Avoid alcohol and smoking while breast tissue is still developing",
    "Talk with a parent or doctor about any family history of breast cancer",
];

const PREMENOPAUSAL_HIGH: &[&str] = &[
    "Discuss starting screening early, including mammography or breast MRI, with your doctor",
    "Ask your doctor whether genetic counseling or BRCA testing is right for you",
    "Perform a breast self-exam every month, a few days after your period ends",
    "Ask about risk-reducing options such as preventive medication",
];

const PREMENOPAUSAL: &[&str] = &[
    "Perform a breast self-exam every month, a few days after your period ends",
    "Schedule a clinical breast exam every one to three years",
    "Start discussing a mammography timeline with your doctor from age 40",
];

const POSTMENOPAUSAL: &[&str] = &[
    "Get a screening mammogram every year",
    "Keep a healthy weight, since fat tissue becomes the main source of estrogen after menopause",
    "Review the risks and benefits of any hormone replacement therapy with your doctor",
    "Stay active with at least 150 minutes of moderate exercise each week",
];

pub(crate) const ALCOHOL_RECOMMENDATION: &str =
    "Limit alcohol to no more than one drink per day, or avoid it entirely";

const WEIGHT_AND_EXERCISE: &[&str] = &[
    "Aim for at least 150 minutes of moderate exercise per week",
    "Work toward and maintain a healthy body weight through balanced nutrition",
];

const HORMONE: &[&str] = &[
    "Talk to your doctor about the risks and benefits of hormone therapy",
    "Explore non-hormonal options for managing menopausal symptoms",
];

const UNIVERSAL: &[&str] = &[
    "Eat a diet rich in vegetables, fruits, and whole grains",
    "Practice stress management techniques such as meditation or yoga",
    "Get 7 to 9 hours of quality sleep each night",
    "Limit exposure to environmental toxins and endocrine-disrupting chemicals",
];

/// Builds the recommendation list in a fixed order: the profile/category set, advice
/// triggered by wording in the identified risk factors, then the universal tail.
///
/// Triggers match substrings of the explanation text. Nothing is de-duplicated.
pub fn generate_recommendations(
    profile: UserProfile,
    category: RiskCategory,
    risk_factors: &[String],
) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    let base: &[&str] = match (profile, category) {
        (UserProfile::Teenager, _) => TEENAGER,
        (UserProfile::Premenopausal, RiskCategory::High) => PREMENOPAUSAL_HIGH,
        (UserProfile::Premenopausal, _) => PREMENOPAUSAL,
        (UserProfile::Postmenopausal, _) => POSTMENOPAUSAL,
        (UserProfile::CurrentPatient | UserProfile::Survivor, _) => &[],
    };
    extend(&mut recommendations, base);

    let mentions = |needle: &str| risk_factors.iter().any(|factor| factor.contains(needle));

    if mentions("alcohol") {
        recommendations.push(ALCOHOL_RECOMMENDATION.to_string());
    }
    if mentions("weight") || mentions("exercise") {
        extend(&mut recommendations, WEIGHT_AND_EXERCISE);
    }
    if mentions("hormone") {
        extend(&mut recommendations, HORMONE);
    }

    extend(&mut recommendations, UNIVERSAL);
    recommendations
}

fn extend(target: &mut Vec<String>, items: &[&str]) {
    target.extend(items.iter().map(|item| item.to_string()));
}
