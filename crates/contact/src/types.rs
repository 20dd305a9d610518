use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Service categories offered on the site. `service` stays free text end to
/// end; this enum is the display-label table for the codes the form emits.
#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, AsRefStr)]
pub enum ServiceCategory {
    #[strum(serialize = "web-development")]
    WebDevelopment,
    #[strum(serialize = "digital-marketing")]
    DigitalMarketing,
    #[strum(serialize = "business-consulting")]
    BusinessConsulting,
    #[strum(serialize = "mobile-app-development")]
    MobileAppDevelopment,
    #[strum(serialize = "brand-strategy")]
    BrandStrategy,
    #[strum(serialize = "e-commerce-solutions")]
    EcommerceSolutions,
    #[strum(serialize = "other")]
    Other,
}

impl ServiceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::DigitalMarketing => "Digital Marketing",
            Self::BusinessConsulting => "Business Consulting",
            Self::MobileAppDevelopment => "Mobile App Development",
            Self::BrandStrategy => "Brand Strategy",
            Self::EcommerceSolutions => "E-commerce Solutions",
            Self::Other => "Other Services",
        }
    }
}

/// Budget bands a submitter can pick from.
#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, AsRefStr)]
pub enum BudgetBand {
    #[strum(serialize = "under-10k")]
    Under10k,
    #[strum(serialize = "10k-25k")]
    From10kTo25k,
    #[strum(serialize = "25k-50k")]
    From25kTo50k,
    #[strum(serialize = "50k-100k")]
    From50kTo100k,
    #[strum(serialize = "over-100k")]
    Over100k,
}

impl BudgetBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Under10k => "Under $10,000",
            Self::From10kTo25k => "$10,000 - $25,000",
            Self::From25kTo50k => "$25,000 - $50,000",
            Self::From50kTo100k => "$50,000 - $100,000",
            Self::Over100k => "Over $100,000",
        }
    }
}

/// Resolve a service code to its display label; unrecognized codes pass
/// through verbatim.
pub fn service_label(code: &str) -> &str {
    code.parse::<ServiceCategory>()
        .map(|category| category.label())
        .unwrap_or(code)
}

/// Resolve a budget code to its display label; unrecognized codes pass
/// through verbatim.
pub fn budget_label(code: &str) -> &str {
    code.parse::<BudgetBand>()
        .map(|band| band.label())
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_service_codes_resolve_to_labels() {
        assert_eq!(service_label("web-development"), "Web Development");
        assert_eq!(service_label("e-commerce-solutions"), "E-commerce Solutions");
        assert_eq!(service_label("other"), "Other Services");
    }

    #[test]
    fn unknown_service_codes_pass_through() {
        assert_eq!(service_label("underwater-basket-weaving"), "underwater-basket-weaving");
        assert_eq!(service_label(""), "");
    }

    #[test]
    fn budget_codes_resolve_to_labels() {
        assert_eq!(budget_label("under-10k"), "Under $10,000");
        assert_eq!(budget_label("over-100k"), "Over $100,000");
        assert_eq!(budget_label("blank-check"), "blank-check");
    }

    #[test]
    fn form_codes_round_trip_through_strum() {
        assert_eq!(ServiceCategory::WebDevelopment.as_ref(), "web-development");
        assert_eq!(BudgetBand::From25kTo50k.as_ref(), "25k-50k");
    }
}
