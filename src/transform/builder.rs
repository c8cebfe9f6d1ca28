//! Document builder: normalized records to the articulation set tree.
//!
//! The builder performs no validation of its own. It trusts the parser's
//! defaulting, so it is total: every record sequence produces a document.
//! Optional substructures (switch entries, the multiple-outputs flag, the
//! symbol tag, the mode tag) are emitted only when the source data warrants
//! them, and key order within each dictionary is fixed for output stability.

use crate::models::{ArticulationRecord, InputSwitch, OutputMessage};
use crate::plist::{PlistDict, PlistValue};

/// Build the articulation set document for `records`.
///
/// `set_name` is the output file stem; the document's `Name` entry becomes
/// `<set_name>.plist`. Records are consumed twice: once for the
/// `Articulations` array and once for the `Switches` array, which only
/// contains entries for records with a trigger condition.
pub fn build_document(records: &[ArticulationRecord], set_name: &str) -> PlistDict {
    let mut doc = PlistDict::new();

    let articulations = records
        .iter()
        .map(|record| PlistValue::Dict(articulation_dict(record)))
        .collect();
    doc.push("Articulations", PlistValue::Array(articulations));

    // Present only when some record actually uses a second output message.
    if records.iter().any(|record| record.has_multiple_outputs()) {
        doc.push("MultipleOutputsActive", PlistValue::Boolean(true));
    }

    doc.push_string("Name", format!("{set_name}.plist"));

    let switches = records
        .iter()
        .filter_map(|record| {
            record
                .input
                .as_ref()
                .map(|input| PlistValue::Dict(switch_dict(record.switch_id(), input)))
        })
        .collect();
    doc.push("Switches", PlistValue::Array(switches));

    doc
}

fn articulation_dict(record: &ArticulationRecord) -> PlistDict {
    let mut dict = PlistDict::new();
    dict.push_integer("ArticulationID", i64::from(record.id));
    dict.push_integer("ID", i64::from(record.switch_id()));
    dict.push_integer("MidiChannel", record.channel);
    dict.push_string("Name", record.name.clone());

    let outputs = record
        .outputs()
        .map(|output| PlistValue::Dict(output_dict(output)))
        .collect();
    dict.push("Output", PlistValue::Array(outputs));

    // Logic's channel-strip schema repeats OutputChannel once per output block.
    for output in record.outputs() {
        dict.push_integer("OutputChannel", output.channel);
    }

    if !record.symbol.is_empty() {
        dict.push_string("Symbol", record.symbol.clone());
    }

    dict
}

fn output_dict(output: &OutputMessage) -> PlistDict {
    let mut dict = PlistDict::new();
    dict.push_integer("MB1", output.selector);
    dict.push_integer("MidiChannel", output.channel);
    dict.push_string("Status", output.status.clone());
    dict.push_integer("ValueLow", output.value);
    dict
}

fn switch_dict(id: u32, input: &InputSwitch) -> PlistDict {
    let mut dict = PlistDict::new();
    dict.push_integer("ID", i64::from(id));
    dict.push_integer("MB1", input.selector);
    // "Permanent" is Logic's implicit default and is never written out.
    if !input.is_permanent() {
        dict.push_string("Mode", input.mode.clone());
    }
    dict.push_string("Status", input.status.clone());
    dict.push_integer("ValueHigh", input.value_end);
    dict.push_integer("ValueLow", input.value_start);
    dict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_records;

    fn output(status: &str, channel: i64, selector: i64, value: i64) -> OutputMessage {
        OutputMessage {
            status: status.to_string(),
            channel,
            selector,
            value,
        }
    }

    fn record(id: u32) -> ArticulationRecord {
        ArticulationRecord {
            id,
            name: "Pizz".to_string(),
            channel: 0,
            symbol: String::new(),
            input: None,
            output1: output("Note On", 0, 0, 0),
            output2: None,
            output3: None,
        }
    }

    fn keys(dict: &PlistDict) -> Vec<&str> {
        dict.entries().iter().map(|(k, _)| k.as_str()).collect()
    }

    fn as_dict(value: &PlistValue) -> &PlistDict {
        match value {
            PlistValue::Dict(dict) => dict,
            other => panic!("expected dict, got {other:?}"),
        }
    }

    fn as_array(value: &PlistValue) -> &[PlistValue] {
        match value {
            PlistValue::Array(items) => items,
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_top_level_key_order() {
        let records = vec![record(1)];
        let doc = build_document(&records, "artics");
        assert_eq!(keys(&doc), vec!["Articulations", "Name", "Switches"]);

        let mut multi = record(1);
        multi.output2 = Some(output("Program", 0, 5, 0));
        let doc = build_document(&[multi], "artics");
        assert_eq!(
            keys(&doc),
            vec!["Articulations", "MultipleOutputsActive", "Name", "Switches"]
        );
    }

    #[test]
    fn test_articulation_key_order() {
        let mut r = record(1);
        r.symbol = "staccato".to_string();
        r.output2 = Some(output("Program", 1, 5, 0));

        let doc = build_document(&[r], "artics");
        let artic = as_dict(&as_array(doc.get("Articulations").unwrap())[0]);
        assert_eq!(
            keys(artic),
            vec![
                "ArticulationID",
                "ID",
                "MidiChannel",
                "Name",
                "Output",
                "OutputChannel",
                "OutputChannel",
                "Symbol"
            ]
        );
    }

    #[test]
    fn test_output_channel_repeated_per_output() {
        let mut r = record(1);
        r.output1 = output("Note On", 2, 60, 100);
        r.output2 = Some(output("Program", 5, 1, 0));
        r.output3 = Some(output("Controller", 7, 32, 64));

        let doc = build_document(&[r], "artics");
        let artic = as_dict(&as_array(doc.get("Articulations").unwrap())[0]);

        let channels: Vec<&PlistValue> = artic.values("OutputChannel").collect();
        assert_eq!(
            channels,
            vec![
                &PlistValue::Integer(2),
                &PlistValue::Integer(5),
                &PlistValue::Integer(7)
            ]
        );
        assert_eq!(as_array(artic.get("Output").unwrap()).len(), 3);
    }

    #[test]
    fn test_multiple_outputs_flag_ignores_slot_three() {
        let mut r = record(1);
        r.output3 = Some(output("Program", 0, 5, 0));

        let doc = build_document(&[r], "artics");
        assert!(doc.get("MultipleOutputsActive").is_none());
        let artic = as_dict(&as_array(doc.get("Articulations").unwrap())[0]);
        assert_eq!(as_array(artic.get("Output").unwrap()).len(), 2);
    }

    #[test]
    fn test_symbol_omitted_when_blank() {
        let doc = build_document(&[record(1)], "artics");
        let artic = as_dict(&as_array(doc.get("Articulations").unwrap())[0]);
        assert!(artic.get("Symbol").is_none());
    }

    #[test]
    fn test_switches_only_for_records_with_input() {
        let with_input = ArticulationRecord {
            input: Some(InputSwitch {
                status: "Note On".to_string(),
                selector: 36,
                value_start: 1,
                value_end: 127,
                mode: "Permanent".to_string(),
            }),
            ..record(1)
        };
        let without_input = record(2);

        let doc = build_document(&[with_input, without_input], "artics");
        assert_eq!(as_array(doc.get("Articulations").unwrap()).len(), 2);

        let switches = as_array(doc.get("Switches").unwrap());
        assert_eq!(switches.len(), 1);
        let switch = as_dict(&switches[0]);
        assert_eq!(switch.get("ID"), Some(&PlistValue::Integer(1001)));
        assert_eq!(switch.get("MB1"), Some(&PlistValue::Integer(36)));
        assert_eq!(switch.get("ValueHigh"), Some(&PlistValue::Integer(127)));
        assert_eq!(switch.get("ValueLow"), Some(&PlistValue::Integer(1)));
    }

    #[test]
    fn test_mode_omitted_iff_permanent() {
        let mut input = InputSwitch {
            status: "Note On".to_string(),
            selector: 36,
            value_start: 1,
            value_end: 127,
            mode: "Permanent".to_string(),
        };

        let permanent = ArticulationRecord {
            input: Some(input.clone()),
            ..record(1)
        };
        let doc = build_document(&[permanent], "artics");
        let switch = as_dict(&as_array(doc.get("Switches").unwrap())[0]);
        assert!(switch.get("Mode").is_none());
        assert_eq!(
            keys(switch),
            vec!["ID", "MB1", "Status", "ValueHigh", "ValueLow"]
        );

        input.mode = "Momentary".to_string();
        let momentary = ArticulationRecord {
            input: Some(input.clone()),
            ..record(1)
        };
        let doc = build_document(&[momentary], "artics");
        let switch = as_dict(&as_array(doc.get("Switches").unwrap())[0]);
        assert_eq!(
            switch.get("Mode"),
            Some(&PlistValue::String("Momentary".to_string()))
        );
        assert_eq!(
            keys(switch),
            vec!["ID", "MB1", "Mode", "Status", "ValueHigh", "ValueLow"]
        );
    }

    #[test]
    fn test_blank_mode_still_written() {
        let input = InputSwitch {
            status: "Note On".to_string(),
            selector: 36,
            value_start: 1,
            value_end: 127,
            mode: String::new(),
        };
        let r = ArticulationRecord {
            input: Some(input),
            ..record(1)
        };

        let doc = build_document(&[r], "artics");
        let switch = as_dict(&as_array(doc.get("Switches").unwrap())[0]);
        assert_eq!(switch.get("Mode"), Some(&PlistValue::String(String::new())));
    }

    #[test]
    fn test_document_name_from_set_name() {
        let doc = build_document(&[], "strings");
        assert_eq!(
            doc.get("Name"),
            Some(&PlistValue::String("strings.plist".to_string()))
        );
        assert_eq!(as_array(doc.get("Articulations").unwrap()).len(), 0);
        assert_eq!(as_array(doc.get("Switches").unwrap()).len(), 0);
    }

    // The two-row scenario exercising most of the mapping at tree level.
    #[test]
    fn test_two_row_sheet_end_to_end() {
        let sheet = "header\n\
                     ,1,staccato,,,,,,,2,60,100,,,,,,,,\n\
                     Pizz,3,,Note On,36,1,127,Permanent,Program,1,5,0,Note On,1,36,127,,,,";
        let records = parse_records(sheet).unwrap();
        let doc = build_document(&records, "artics");

        let artics = as_array(doc.get("Articulations").unwrap());
        assert_eq!(artics.len(), 2);

        // Row A: defaulted name, normalized channel, symbol kept, no switch.
        let a = as_dict(&artics[0]);
        assert_eq!(a.get("ArticulationID"), Some(&PlistValue::Integer(1)));
        assert_eq!(a.get("ID"), Some(&PlistValue::Integer(1001)));
        assert_eq!(a.get("Name"), Some(&PlistValue::String("--".to_string())));
        assert_eq!(a.get("MidiChannel"), Some(&PlistValue::Integer(0)));
        assert_eq!(
            a.get("Symbol"),
            Some(&PlistValue::String("staccato".to_string()))
        );
        let a_outputs = as_array(a.get("Output").unwrap());
        assert_eq!(a_outputs.len(), 1);
        let a_out = as_dict(&a_outputs[0]);
        assert_eq!(
            a_out.get("Status"),
            Some(&PlistValue::String("Note On".to_string()))
        );
        assert_eq!(a_out.get("MidiChannel"), Some(&PlistValue::Integer(1)));
        assert_eq!(a_out.get("MB1"), Some(&PlistValue::Integer(60)));
        assert_eq!(a_out.get("ValueLow"), Some(&PlistValue::Integer(100)));

        // Row B: two outputs, flag set, one switch with no mode entry.
        let b = as_dict(&artics[1]);
        assert_eq!(b.get("Name"), Some(&PlistValue::String("Pizz".to_string())));
        assert_eq!(b.get("MidiChannel"), Some(&PlistValue::Integer(2)));
        assert_eq!(as_array(b.get("Output").unwrap()).len(), 2);

        assert_eq!(
            doc.get("MultipleOutputsActive"),
            Some(&PlistValue::Boolean(true))
        );

        let switches = as_array(doc.get("Switches").unwrap());
        assert_eq!(switches.len(), 1);
        let switch = as_dict(&switches[0]);
        assert_eq!(switch.get("ID"), Some(&PlistValue::Integer(1002)));
        assert!(switch.get("Mode").is_none());
        assert_eq!(switch.get("ValueHigh"), Some(&PlistValue::Integer(127)));
        assert_eq!(switch.get("ValueLow"), Some(&PlistValue::Integer(1)));
    }
}
