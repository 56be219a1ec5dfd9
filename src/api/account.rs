//! Account lookup

use super::client::UthoClient;
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub fullname: String,
    pub company: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: String,
    pub mobile: String,
    pub mobilecc: String,
    pub gstnumber: String,
    pub supportneed_title: String,
    pub supportneed_usecase: String,
    pub supportneed_businesstype: String,
    pub supportneed_monthlyspend: String,
    pub supportneed_employeesize: String,
    pub support_fields_required: String,
    pub twofa_settings: String,
    pub currencyprefix: String,
    pub currencyrate: String,
    pub currency: String,
    pub credit: f64,
    pub availablecredit: f64,
    pub freecredit: f64,
    pub currentusages: f64,
    pub kyc: String,
    pub sms_verified: String,
    pub verify: String,
    pub is_partner: String,
    pub partnerid: String,
    pub twofa: String,
    pub email_verified: String,
    pub cloudlimit: String,
    pub k8s_limit: String,
    pub is_reseller: String,
    pub singleinvoice: String,
    pub razorpay_customerid: String,
    pub razorpay_orderid: String,
    pub stripe_customer: String,
    pub total_cloudservers: String,
    pub resources: Vec<AccountResource>,
    pub rvn: String,
    pub c_added: String,
    pub razorpay_sub: String,
    pub affiliate_loginid: String,
}

/// Per-product usage counter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountResource {
    pub product: String,
    pub count: String,
}

impl UthoClient {
    pub async fn get_account(&self) -> Result<Account> {
        self.get_ok("account/info", "account data").await
    }
}
