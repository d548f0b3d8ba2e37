//! 3GPP TS 35.208 conformance data
//!
//! Inputs and published f1..f5* outputs for Milenage test sets 1 and 2.
//! AUTN and AUTS are not part of TS 35.208; the values here follow from
//! the published outputs (AUTN = SQN^AK || AMF || MAC-A, AUTS = SQN^AK* ||
//! f1* with AMF 0000).

/// One conformance test set, lowercase hex throughout.
#[derive(Debug, Clone, Copy)]
pub struct TestSet {
    pub name: &'static str,
    pub k: &'static str,
    pub op: &'static str,
    pub opc: &'static str,
    pub rand: &'static str,
    pub amf: &'static str,
    pub sqn: &'static str,
    pub mac_a: &'static str,
    pub mac_s: &'static str,
    pub res: &'static str,
    pub ck: &'static str,
    pub ik: &'static str,
    pub ak: &'static str,
    pub ak_s: &'static str,
    pub autn: &'static str,
    pub auts: &'static str,
}

impl TestSet {
    /// Positional arguments in command-line order, with OPc.
    pub fn args(&self) -> [&'static str; 5] {
        [self.k, self.opc, self.rand, self.amf, self.sqn]
    }

    /// Expected `[OUTPUT]` rows in report order.
    pub fn expected_outputs(&self) -> [(&'static str, &'static str); 9] {
        [
            ("MAC-A", self.mac_a),
            ("MAC-S", self.mac_s),
            ("RES", self.res),
            ("CK", self.ck),
            ("IK", self.ik),
            ("AK", self.ak),
            ("AKS", self.ak_s),
            ("AUTN", self.autn),
            ("AUTS", self.auts),
        ]
    }
}

pub const TEST_SET_1: TestSet = TestSet {
    name: "TS 35.208 test set 1",
    k: "465b5ce8b199b49faa5f0a2ee238a6bc",
    op: "cdc202d5123e20f62b6d676ac72cb318",
    opc: "cd63cb71954a9f4e48a5994e37a02baf",
    rand: "23553cbe9637a89d218ae64dae47bf35",
    amf: "b9b9",
    sqn: "ff9bb4d0b607",
    mac_a: "4a9ffac354dfafb3",
    mac_s: "01cfaf9ec4e871e9",
    res: "a54211d5e3ba50bf",
    ck: "b40ba9a3c58b2a05bbf0d987b21bf8cb",
    ik: "f769bcd751044604127672711c6d3441",
    ak: "aa689c648370",
    ak_s: "451e8beca43b",
    autn: "55f328b43577b9b94a9ffac354dfafb3",
    auts: "ba853f3c123ccf44e93596e355c6",
};

pub const TEST_SET_2: TestSet = TestSet {
    name: "TS 35.208 test set 2",
    k: "fec86ba6eb707ed08905757b1bb44b8f",
    op: "dbc59adcb6f9a0ef735477b7fadf8374",
    opc: "1006020f0a478bf6b699f15c062e42b3",
    rand: "9f7c8d021accf4db213ccff0c7f71a6a",
    amf: "725c",
    sqn: "9d0277595ffc",
    mac_a: "9cabc3e99baf7281",
    mac_s: "95814ba2b3044324",
    res: "8011c48c0c214ed2",
    ck: "5dbdbb2954e8f3cde665b046179a5098",
    ik: "59a92d3b476a0443487055cf88b2307b",
    ak: "33484dc2136b",
    ak_s: "deacdd848cc6",
    autn: "ae4a3a9b4c97725c9cabc3e99baf7281",
    auts: "43aeaaddd33a9f8be774d095d08b",
};

pub const TEST_SETS: [TestSet; 2] = [TEST_SET_1, TEST_SET_2];
