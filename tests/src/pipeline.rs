//! End-to-end pipeline tests: hex strings in, report out.

#[cfg(test)]
mod tests {
    use akaio_cli::{build_autn, compute_vector, render, render_text, VectorInput};
    use akaio_common::{OpType, OutputFormat};
    use akaio_crypto::milenage::{compute_opc, Milenage};
    use proptest::prelude::*;

    use crate::test_fixtures::TEST_SETS;
    use crate::test_utils::{bytes, hex_upper, init_test_logging};

    fn parse(set: &crate::TestSet, op_type: OpType) -> VectorInput {
        let op = match op_type {
            OpType::Opc => set.opc,
            OpType::Op => set.op,
        };
        VectorInput::parse(set.k, op, set.rand, set.amf, set.sqn, op_type).unwrap()
    }

    #[test]
    fn test_published_vectors() {
        init_test_logging();
        for set in TEST_SETS {
            let vector = compute_vector(&parse(&set, OpType::Opc)).unwrap();
            for ((label, actual), (expected_label, expected)) in
                vector.output_fields().iter().zip(set.expected_outputs())
            {
                assert_eq!(*label, expected_label, "{}", set.name);
                assert_eq!(hex::encode(actual), expected, "{} {}", set.name, label);
            }
        }
    }

    #[test]
    fn test_op_input_derives_published_opc() {
        for set in TEST_SETS {
            let k: [u8; 16] = bytes(set.k).try_into().unwrap();
            let op: [u8; 16] = bytes(set.op).try_into().unwrap();
            assert_eq!(hex::encode(compute_opc(&k, &op)), set.opc, "{}", set.name);

            let vector = compute_vector(&parse(&set, OpType::Op)).unwrap();
            assert_eq!(hex::encode(vector.opc), set.opc, "{}", set.name);
            assert_eq!(hex::encode(vector.autn), set.autn, "{}", set.name);
        }
    }

    #[test]
    fn test_text_report_rows() {
        for set in TEST_SETS {
            let text = render_text(&compute_vector(&parse(&set, OpType::Opc)).unwrap());
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 16, "{}", set.name);
            assert_eq!(lines[0], "[INPUT]");
            assert_eq!(lines[6], "[OUTPUT]");

            let inputs = ["K", "OPc", "RAND", "AMF", "SQN"];
            for (row, (label, value)) in lines[1..6].iter().zip(inputs.iter().zip(set.args())) {
                assert_eq!(*row, format!("{label:<6}: {}", hex_upper(value)));
            }
            for (row, (label, value)) in lines[7..].iter().zip(set.expected_outputs()) {
                assert_eq!(*row, format!("{label:<6}: {}", hex_upper(value)));
            }
        }
    }

    #[test]
    fn test_short_k_error_names_field() {
        let set = TEST_SETS[0];
        let err = VectorInput::parse(&set.k[..30], set.opc, set.rand, set.amf, set.sqn, OpType::Opc)
            .unwrap_err();
        assert_eq!(format!("{err:#}"), "Invalid K: K must be 32 hex characters, got 30");
    }

    #[test]
    fn test_autn_is_not_taken_from_library() {
        let set = TEST_SETS[0];
        let input = parse(&set, OpType::Opc);
        let milenage = Milenage::new(&input.k, &input.op);
        let outputs = milenage
            .compute_all(&input.rand, input.sqn_value(), input.amf_value())
            .unwrap();

        let autn = build_autn(&input.sqn, &outputs.ak, &input.amf, &outputs.mac_a);
        assert_eq!(hex::encode(autn), set.autn);
        assert_eq!(compute_vector(&input).unwrap().autn, autn);
    }

    #[test]
    fn test_json_report_matches_text_report() {
        let vector = compute_vector(&parse(&TEST_SETS[1], OpType::Opc)).unwrap();
        let json = render(&vector, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let text = render_text(&vector);
        for line in text.lines().filter(|l| l.contains(" : ")) {
            let (label, hex_value) = line.split_once(':').unwrap();
            let label = label.trim();
            let section = if value["input"].get(label).is_some() { "input" } else { "output" };
            assert_eq!(value[section][label], hex_value.trim(), "{label}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_any_valid_hex_input_yields_full_report(
            k in "[0-9a-fA-F]{32}",
            opc in "[0-9a-fA-F]{32}",
            rand in "[0-9a-fA-F]{32}",
            amf in "[0-9a-fA-F]{4}",
            sqn in "[0-9a-fA-F]{12}",
        ) {
            let input = VectorInput::parse(&k, &opc, &rand, &amf, &sqn, OpType::Opc).unwrap();
            let vector = compute_vector(&input).unwrap();
            let text = render_text(&vector);
            prop_assert_eq!(text.lines().count(), 16);
            prop_assert_eq!(render_text(&compute_vector(&input).unwrap()), text);

            let sqn_bytes = bytes(&sqn.to_lowercase());
            for i in 0..6 {
                prop_assert_eq!(vector.autn[i], sqn_bytes[i] ^ vector.outputs.ak[i]);
            }
        }

        #[test]
        fn prop_wrong_length_k_is_rejected(k in "[0-9a-f]{0,40}") {
            prop_assume!(k.len() != 32);
            let set = TEST_SETS[0];
            let err = VectorInput::parse(&k, set.opc, set.rand, set.amf, set.sqn, OpType::Opc)
                .unwrap_err();
            let msg = format!("{err:#}");
            prop_assert!(msg.starts_with("Invalid K: K must be 32 hex characters"), "{}", msg);
        }
    }
}
