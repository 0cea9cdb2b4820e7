//! Query for the bank listing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankCountry {
    Ghana,
    Kenya,
    Nigeria,
    #[serde(rename = "south africa")]
    SouthAfrica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankGateway {
    Emandate,
    Digitalbankmandate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBanksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<BankCountry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cursor: Option<bool>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_with_bank_transfer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_with_bank: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<BankGateway>,
    /// `mobile_money` or `ghipss`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bank_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_nip_sort_code: Option<bool>,
}

impl ListBanksQuery {
    pub fn country(country: BankCountry) -> Self {
        Self {
            country: Some(country),
            ..Self::default()
        }
    }

    /// Continue after `cursor`. Sets `use_cursor` as Paystack requires.
    pub fn with_next(mut self, cursor: impl Into<String>) -> Self {
        self.use_cursor = Some(true);
        self.next = Some(cursor.into());
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_with_space_is_encoded() {
        let q = ListBanksQuery::country(BankCountry::SouthAfrica).with_per_page(5);
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "country=south+africa&perPage=5"
        );
    }

    #[test]
    fn test_next_enables_cursor() {
        let q = ListBanksQuery::default().with_next("YmFuazoxNjk=");
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "use_cursor=true&next=YmFuazoxNjk%3D"
        );
    }
}
