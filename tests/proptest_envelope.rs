//! Property-based tests using proptest
//!
//! These tests cover the status envelope checks, DNS hostname trimming, path
//! segment encoding, the wire names of request fields and JSON round trips of
//! every create request.

use proptest::prelude::*;
use utho_provider::api::client::segment;
use utho_provider::api::domain::DnsRecordRequest;
use utho_provider::api::envelope::SUCCESS;
use utho_provider::api::{ApiError, Envelope};
use utho_provider::resource::adapter::parse_flag;
use utho_provider::resource::dns_record::relative_hostname;

fn arb_status() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(SUCCESS.to_string())),
        Just(Some("error".to_string())),
        "[A-Za-z]{0,12}".prop_map(Some),
    ]
}

proptest! {
    /// Strict check passes exactly for the literal success status
    #[test]
    fn strict_check_requires_success(status in arb_status(), message in proptest::option::of(".{0,40}")) {
        let envelope = Envelope { status: status.clone(), message: message.clone() };
        let result = envelope.ensure_success();

        if status.as_deref() == Some(SUCCESS) {
            prop_assert!(result.is_ok());
        } else {
            match result {
                Err(ApiError::Api { message: text }) => {
                    prop_assert_eq!(text, message.unwrap_or_default());
                }
                other => prop_assert!(false, "unexpected result {:?}", other),
            }
        }
    }

    /// Lenient check only fails on a present, non-success status
    #[test]
    fn lenient_check_tolerates_missing_status(status in arb_status()) {
        let envelope = Envelope { status: status.clone(), message: None };
        let failed = matches!(status.as_deref(), Some(s) if s != SUCCESS);
        prop_assert_eq!(envelope.ensure_not_failed().is_err(), failed);
    }

    /// Replies decode whatever else they carry next to the envelope
    #[test]
    fn envelope_decodes_alongside_payload(id in "[0-9]{1,6}", message in "[a-zA-Z ]{0,30}") {
        let body = serde_json::json!({"id": id, "status": "error", "message": message});
        let envelope: Envelope = serde_json::from_value(body).unwrap();
        prop_assert_eq!(envelope.ensure_success().unwrap_err().to_string(), message);
    }
}

proptest! {
    /// A fully qualified hostname loses its zone and the joining dot
    #[test]
    fn hostname_relative_to_zone(label in "[a-z0-9]{1,12}", zone in "zone-[a-z]{2,6}\\.com") {
        let fqdn = format!("{label}.{zone}");
        prop_assert_eq!(relative_hostname(&fqdn, &zone), label.clone());

        let rooted = format!("{fqdn}.");
        prop_assert_eq!(relative_hostname(&rooted, &zone), format!("{label}."));
    }

    /// Hostnames that never mention the zone only lose one trailing dot
    #[test]
    fn hostname_without_zone_untouched(label in "[a-z0-9]{1,12}") {
        prop_assert_eq!(relative_hostname(&label, "example.com"), label.clone());
        prop_assert_eq!(relative_hostname(&format!("{label}."), "example.com"), label);
    }

    /// Encoded segments never contain separators and decode back
    #[test]
    fn segment_is_reversible(value in ".{0,30}") {
        let encoded = segment(&value);
        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains(' '));
        prop_assert_eq!(urlencoding::decode(&encoded).unwrap().into_owned(), value);
    }

    /// Boolean flags accept the usual spellings in any case
    #[test]
    fn flags_parse_case_insensitively(truthy in prop::bool::ANY, upper in prop::bool::ANY, short in prop::bool::ANY) {
        let word = match (truthy, short) {
            (true, true) => "t",
            (true, false) => "true",
            (false, true) => "f",
            (false, false) => "false",
        };
        let word = if upper { word.to_uppercase() } else { word.to_string() };
        prop_assert_eq!(parse_flag("flag", &word).unwrap(), truthy);
    }

    /// Record type and weight go out under the API's field names
    #[test]
    fn dns_record_request_wire_names(kind in "[A-Z]{1,5}", weight in "[0-9]{0,3}") {
        let request = DnsRecordRequest {
            kind: kind.clone(),
            weight: weight.clone(),
            ..DnsRecordRequest::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        prop_assert_eq!(&value["type"], &serde_json::Value::String(kind));
        prop_assert_eq!(&value["wight"], &serde_json::Value::String(weight));
        prop_assert!(value.get("weight").is_none());
        prop_assert!(value.get("kind").is_none());
    }
}

mod request_roundtrip_tests {
    use super::*;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use std::fmt::Debug;
    use utho_provider::api::auto_scaling::{
        CreateAutoScalingRequest, PolicyRequest, ScheduleRequest, UpdateAutoScalingRequest,
    };
    use utho_provider::api::cloud_instance::{CloudHostname, CreateCloudInstanceRequest};
    use utho_provider::api::firewall::FirewallRequest;
    use utho_provider::api::sqs::SqsRequest;
    use utho_provider::api::target_group::{TargetGroupRequest, TargetRequest};
    use utho_provider::api::vpc::VpcRequest;

    fn text() -> impl Strategy<Value = String> {
        ".{0,16}"
    }

    fn roundtrip<T: Serialize + DeserializeOwned>(value: &T) -> T {
        let bytes = serde_json::to_vec(value).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn check<T: Serialize + DeserializeOwned + PartialEq + Debug>(
        value: T,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(roundtrip(&value), value);
        Ok(())
    }

    prop_compose! {
        fn arb_cloud_request()(
            (dcslug, image, planid, vpc, root_password, firewall) in
                (text(), text(), text(), text(), text(), text()),
            (enablebackup, billingcycle, backupid, snapshotid, sshkeys) in
                (text(), text(), text(), text(), text()),
            hostnames in prop::collection::vec(text(), 0..3),
        ) -> CreateCloudInstanceRequest {
            CreateCloudInstanceRequest {
                dcslug, image, planid, vpc, root_password, firewall,
                enablebackup, billingcycle, backupid, snapshotid, sshkeys,
                cloud: hostnames.into_iter().map(|hostname| CloudHostname { hostname }).collect(),
            }
        }
    }

    prop_compose! {
        fn arb_target_group_request()(
            (name, protocol, port, health_check_path, health_check_protocol) in
                (text(), text(), text(), text(), text()),
            (health_check_interval, health_check_timeout, healthy_threshold, unhealthy_threshold) in
                (text(), text(), text(), text()),
        ) -> TargetGroupRequest {
            TargetGroupRequest {
                name, protocol, port, health_check_path, health_check_protocol,
                health_check_interval, health_check_timeout, healthy_threshold,
                unhealthy_threshold,
            }
        }
    }

    prop_compose! {
        fn arb_policy()(
            (name, kind, compare, value) in (text(), text(), text(), text()),
            (adjust, period, cooldown) in (text(), text(), text()),
        ) -> PolicyRequest {
            PolicyRequest { name, kind, compare, value, adjust, period, cooldown }
        }
    }

    prop_compose! {
        fn arb_schedule()(
            (name, desiredsize, start_date, selected_time, selected_date) in
                (text(), text(), text(), text(), text()),
        ) -> ScheduleRequest {
            ScheduleRequest { name, desiredsize, start_date, selected_time, selected_date }
        }
    }

    prop_compose! {
        fn arb_auto_scaling_request()(
            (name, dcslug, planid, planname, minsize, maxsize) in
                (text(), text(), text(), text(), text(), text()),
            (desiredsize, instance_templateid, vpc, load_balancers, security_groups, target_groups) in
                (text(), text(), text(), text(), text(), text()),
            (stack, stackid, stackimage) in (text(), text(), text()),
            os_disk_size in any::<i64>(),
            public_ip_enabled in any::<bool>(),
            policies in prop::collection::vec(arb_policy(), 0..3),
            schedules in prop::collection::vec(arb_schedule(), 0..3),
        ) -> CreateAutoScalingRequest {
            CreateAutoScalingRequest {
                name, dcslug, planid, planname, os_disk_size, minsize, maxsize, desiredsize,
                instance_templateid, public_ip_enabled, vpc, load_balancers, security_groups,
                target_groups, stack, stackid, stackimage, policies, schedules,
            }
        }
    }

    proptest! {
        #[test]
        fn firewall_and_sqs_requests_roundtrip(name in text(), dcslug in text(), planid in text()) {
            check(FirewallRequest { name: name.clone() })?;
            check(SqsRequest { name, dcslug, planid })?;
        }

        #[test]
        fn vpc_request_roundtrip(
            (dcslug, name, planid, network, size) in (text(), text(), text(), text(), text()),
        ) {
            check(VpcRequest { dcslug, name, planid, network, size })?;
        }

        #[test]
        fn cloud_instance_request_roundtrip(request in arb_cloud_request()) {
            check(request)?;
        }

        #[test]
        fn target_group_requests_roundtrip(
            group in arb_target_group_request(),
            (backend_protocol, backend_port, ip, cloudid) in (text(), text(), text(), text()),
        ) {
            check(group)?;
            check(TargetRequest { backend_protocol, backend_port, ip, cloudid })?;
        }

        #[test]
        fn auto_scaling_requests_roundtrip(
            request in arb_auto_scaling_request(),
            (name, minsize, maxsize, desiredsize) in (text(), text(), text(), text()),
        ) {
            check(request)?;
            check(UpdateAutoScalingRequest { name, minsize, maxsize, desiredsize })?;
        }
    }
}
