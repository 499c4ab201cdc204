//! Minimum-depth networks from the best known constructions.

network! {
    /// Minimum-depth network for 4 elements, depth 3.
    pub struct Minimum4 {
        name: "minimum_4",
        algorithm: Minimum,
        size: 4,
        lanes: 4,
        stages: [
            0 => [(0, 2), (1, 3)],
            1 => [(0, 1), (2, 3)],
            2 => [(1, 2)],
        ],
    }

    /// Minimum-depth network for 7 elements, depth 6.
    pub struct Minimum7 {
        name: "minimum_7",
        algorithm: Minimum,
        size: 7,
        lanes: 7,
        stages: [
            0 => [(0, 6), (2, 3), (4, 5)],
            1 => [(0, 2), (1, 4), (3, 6)],
            2 => [(0, 1), (2, 5), (3, 4)],
            3 => [(1, 2), (4, 6)],
            4 => [(2, 3), (4, 5)],
            5 => [(1, 2), (3, 4), (5, 6)],
        ],
    }

    /// Minimum-depth network for 8 elements, depth 6.
    pub struct Minimum8 {
        name: "minimum_8",
        algorithm: Minimum,
        size: 8,
        lanes: 8,
        stages: [
            0 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            1 => [(0, 4), (1, 5), (2, 6), (3, 7)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7)],
            3 => [(2, 4), (3, 5)],
            4 => [(1, 4), (3, 6)],
            5 => [(1, 2), (3, 4), (5, 6)],
        ],
    }

    /// Minimum-depth network for 9 elements, depth 7.
    pub struct Minimum9 {
        name: "minimum_9",
        algorithm: Minimum,
        size: 9,
        lanes: 9,
        stages: [
            0 => [(0, 3), (1, 7), (2, 5), (4, 8)],
            1 => [(0, 7), (2, 4), (3, 8), (5, 6)],
            2 => [(0, 2), (1, 3), (4, 5), (7, 8)],
            3 => [(1, 4), (3, 6), (5, 7)],
            4 => [(0, 1), (2, 4), (3, 5), (6, 8)],
            5 => [(2, 3), (4, 5), (6, 7)],
            6 => [(1, 2), (3, 4), (5, 6)],
        ],
    }

    /// Minimum-depth network for 11 elements, depth 8.
    pub struct Minimum11 {
        name: "minimum_11",
        algorithm: Minimum,
        size: 11,
        lanes: 11,
        stages: [
            0 => [(0, 9), (1, 6), (2, 4), (3, 7), (5, 8)],
            1 => [(0, 1), (3, 5), (4, 10), (6, 9), (7, 8)],
            2 => [(1, 3), (2, 5), (4, 7), (8, 10)],
            3 => [(0, 4), (1, 2), (3, 7), (5, 9), (6, 8)],
            4 => [(0, 1), (2, 6), (4, 5), (7, 8), (9, 10)],
            5 => [(2, 4), (3, 6), (5, 7), (8, 9)],
            6 => [(1, 2), (3, 4), (5, 6), (7, 8)],
            7 => [(2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Minimum-depth network for 13 elements, depth 9.
    pub struct Minimum13 {
        name: "minimum_13",
        algorithm: Minimum,
        size: 13,
        lanes: 13,
        stages: [
            0 => [(0, 11), (1, 7), (2, 4), (3, 5), (8, 9), (10, 12)],
            1 => [(0, 2), (3, 6), (4, 12), (5, 7), (8, 10)],
            2 => [(0, 8), (1, 3), (2, 5), (4, 9), (6, 11), (7, 12)],
            3 => [(0, 1), (2, 10), (3, 8), (4, 6), (9, 11)],
            4 => [(1, 3), (2, 4), (5, 10), (6, 8), (7, 9), (11, 12)],
            5 => [(1, 2), (3, 4), (5, 8), (6, 9), (7, 10)],
            6 => [(2, 3), (4, 7), (5, 6), (8, 11), (9, 10)],
            7 => [(4, 5), (6, 7), (8, 9), (10, 11)],
            8 => [(3, 4), (5, 6), (7, 8), (9, 10)],
        ],
    }

    /// Minimum-depth network for 14 elements, depth 9.
    pub struct Minimum14 {
        name: "minimum_14",
        algorithm: Minimum,
        size: 14,
        lanes: 14,
        stages: [
            0 => [(0, 3), (1, 9), (2, 6), (4, 12), (5, 10), (7, 11), (8, 13)],
            1 => [(0, 2), (3, 12), (4, 5), (6, 10), (7, 8), (11, 13)],
            2 => [(0, 1), (2, 11), (3, 6), (4, 7), (5, 9), (10, 12)],
            3 => [(0, 4), (1, 7), (2, 5), (3, 8), (6, 13), (9, 11)],
            4 => [(1, 2), (3, 4), (5, 7), (6, 9), (8, 10), (12, 13)],
            5 => [(1, 3), (2, 4), (5, 9), (6, 10), (7, 8), (11, 12)],
            6 => [(2, 3), (4, 5), (6, 7), (8, 11), (9, 10), (12, 13)],
            7 => [(4, 6), (5, 7), (8, 9), (10, 11)],
            8 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
        ],
    }

    /// Minimum-depth network for 15 elements, depth 9.
    pub struct Minimum15 {
        name: "minimum_15",
        algorithm: Minimum,
        size: 15,
        lanes: 15,
        stages: [
            0 => [(0, 6), (1, 10), (2, 14), (3, 9), (4, 12), (5, 13), (7, 11)],
            1 => [(0, 7), (2, 5), (3, 4), (6, 11), (8, 10), (9, 12), (13, 14)],
            2 => [(1, 13), (2, 3), (4, 6), (5, 9), (7, 8), (10, 14), (11, 12)],
            3 => [(0, 3), (1, 4), (5, 7), (6, 13), (8, 9), (10, 11), (12, 14)],
            4 => [(0, 2), (1, 5), (3, 8), (4, 6), (7, 10), (9, 11), (12, 13)],
            5 => [(0, 1), (2, 5), (3, 10), (4, 8), (6, 7), (9, 12), (11, 13)],
            6 => [(1, 2), (3, 4), (5, 6), (7, 9), (8, 10), (11, 12)],
            7 => [(3, 5), (4, 6), (7, 8), (9, 10)],
            8 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11)],
        ],
    }

    /// Minimum-depth network for 16 elements, depth 9.
    pub struct Minimum16 {
        name: "minimum_16",
        algorithm: Minimum,
        size: 16,
        lanes: 16,
        stages: [
            0 => [(0, 5), (1, 4), (2, 12), (3, 13), (6, 7), (8, 9), (10, 15), (11, 14)],
            1 => [(0, 2), (1, 10), (3, 6), (4, 7), (5, 14), (8, 11), (9, 12), (13, 15)],
            2 => [(0, 8), (1, 3), (2, 11), (4, 13), (5, 9), (6, 10), (7, 15), (12, 14)],
            3 => [(0, 1), (2, 4), (3, 8), (5, 6), (7, 12), (9, 10), (11, 13), (14, 15)],
            4 => [(1, 3), (2, 5), (4, 8), (6, 9), (7, 11), (10, 13), (12, 14)],
            5 => [(1, 2), (3, 5), (4, 11), (6, 8), (7, 9), (10, 12), (13, 14)],
            6 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
            7 => [(4, 6), (5, 7), (8, 10), (9, 11)],
            8 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
        ],
    }

    /// Minimum-depth network for 17 elements, depth 10.
    pub struct Minimum17 {
        name: "minimum_17",
        algorithm: Minimum,
        size: 17,
        lanes: 17,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
            1 => [(1, 3), (2, 4), (5, 7), (6, 8), (9, 11), (10, 12), (13, 15), (14, 16)],
            2 => [(1, 5), (2, 6), (3, 7), (4, 8), (9, 13), (10, 14), (11, 15), (12, 16)],
            3 => [(0, 3), (1, 13), (2, 10), (4, 7), (5, 11), (6, 12), (8, 9), (14, 15)],
            4 => [(0, 13), (1, 8), (2, 5), (3, 6), (4, 14), (7, 15), (9, 16), (10, 11)],
            5 => [(0, 1), (2, 8), (3, 4), (5, 10), (6, 13), (7, 11), (12, 14)],
            6 => [(1, 5), (3, 8), (4, 10), (6, 7), (9, 12), (11, 13)],
            7 => [(1, 2), (4, 6), (5, 8), (7, 10), (9, 11), (12, 14), (13, 15)],
            8 => [(2, 3), (4, 5), (6, 8), (7, 9), (10, 11), (12, 13), (14, 15)],
            9 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
        ],
    }

    /// Minimum-depth network for 18 elements, depth 11.
    pub struct Minimum18 {
        name: "minimum_18",
        algorithm: Minimum,
        size: 18,
        lanes: 18,
        stages: [
            0 => [(0, 6), (1, 10), (2, 15), (3, 5), (4, 9), (7, 16), (8, 13), (11, 17), (12, 14)],
            1 => [(0, 12), (1, 4), (3, 11), (5, 17), (6, 14), (7, 8), (9, 10), (13, 16)],
            2 => [(1, 13), (2, 7), (4, 16), (6, 9), (8, 11), (10, 15)],
            3 => [(0, 1), (2, 3), (4, 12), (5, 13), (7, 9), (8, 10), (14, 15), (16, 17)],
            4 => [(0, 2), (1, 11), (3, 4), (5, 7), (6, 16), (10, 12), (13, 14), (15, 17)],
            5 => [(1, 8), (4, 10), (5, 6), (7, 13), (9, 16), (11, 12)],
            6 => [(1, 3), (2, 5), (4, 7), (6, 8), (9, 11), (10, 13), (12, 15), (14, 16)],
            7 => [(1, 2), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14), (15, 16)],
            8 => [(2, 3), (5, 8), (6, 7), (9, 12), (10, 11), (14, 15)],
            9 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
            10 => [(4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
        ],
    }

    /// Minimum-depth network for 19 elements, depth 11.
    pub struct Minimum19 {
        name: "minimum_19",
        algorithm: Minimum,
        size: 19,
        lanes: 19,
        stages: [
            0 => [(0, 12), (1, 13), (2, 14), (3, 15), (4, 16), (5, 17), (6, 18), (8, 10),
                (9, 11)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 9), (10, 11), (12, 14), (13, 15), (16, 18)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (12, 13), (14, 15), (16, 17)],
            3 => [(0, 4), (1, 12), (2, 16), (3, 17), (5, 8), (6, 9), (7, 18), (10, 13), (11, 14)],
            4 => [(1, 6), (3, 10), (4, 5), (7, 11), (8, 12), (9, 16), (13, 18), (14, 15)],
            5 => [(0, 4), (2, 8), (3, 9), (6, 7), (10, 16), (11, 17), (12, 13), (15, 18)],
            6 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16)],
            7 => [(2, 3), (4, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 15), (16, 17)],
            8 => [(2, 4), (3, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 16), (15, 17)],
            9 => [(1, 2), (3, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 16), (17, 18)],
            10 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
        ],
    }

    /// Minimum-depth network for 21 elements, depth 12.
    pub struct Minimum21 {
        name: "minimum_21",
        algorithm: Minimum,
        size: 21,
        lanes: 21,
        stages: [
            0 => [(0, 7), (1, 10), (3, 5), (4, 8), (6, 13), (9, 19), (11, 14), (12, 17),
                (15, 16), (18, 20)],
            1 => [(0, 11), (1, 15), (2, 12), (3, 4), (5, 8), (6, 9), (7, 14), (10, 16),
                (13, 19), (17, 20)],
            2 => [(0, 6), (1, 3), (2, 18), (4, 15), (5, 10), (8, 16), (11, 17), (12, 13),
                (14, 20)],
            3 => [(2, 6), (5, 12), (7, 18), (8, 14), (9, 11), (10, 17), (13, 19), (16, 20)],
            4 => [(1, 2), (4, 7), (5, 9), (6, 17), (10, 13), (11, 12), (14, 19), (15, 18)],
            5 => [(0, 2), (3, 6), (4, 5), (7, 10), (8, 11), (9, 15), (12, 16), (13, 18),
                (14, 17), (19, 20)],
            6 => [(0, 1), (2, 3), (5, 9), (6, 12), (7, 8), (11, 14), (13, 15), (16, 19),
                (17, 18)],
            7 => [(1, 2), (3, 9), (6, 13), (10, 11), (12, 15), (16, 17), (18, 19)],
            8 => [(1, 4), (2, 5), (3, 7), (6, 10), (8, 9), (11, 12), (13, 14), (17, 18)],
            9 => [(2, 4), (5, 6), (7, 8), (9, 11), (10, 13), (12, 15), (14, 16)],
            10 => [(3, 4), (5, 7), (6, 8), (9, 10), (11, 13), (12, 14), (15, 16)],
            11 => [(4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
        ],
    }

    /// Minimum-depth network for 22 elements, depth 12.
    pub struct Minimum22 {
        name: "minimum_22",
        algorithm: Minimum,
        size: 22,
        lanes: 22,
        stages: [
            0 => [(0, 14), (1, 8), (2, 4), (3, 5), (6, 11), (7, 21), (9, 12), (10, 15),
                (13, 20), (16, 18), (17, 19)],
            1 => [(0, 7), (1, 13), (2, 17), (3, 16), (4, 19), (5, 18), (6, 10), (8, 20),
                (11, 15), (14, 21)],
            2 => [(0, 1), (3, 6), (4, 9), (5, 10), (7, 13), (8, 14), (11, 16), (12, 17),
                (15, 18), (20, 21)],
            3 => [(0, 3), (1, 8), (2, 4), (7, 11), (9, 12), (10, 14), (13, 20), (17, 19),
                (18, 21)],
            4 => [(1, 6), (2, 7), (3, 17), (4, 18), (5, 11), (8, 9), (10, 16), (12, 13),
                (14, 19), (15, 20)],
            5 => [(0, 2), (3, 7), (4, 6), (5, 8), (9, 11), (10, 12), (13, 16), (14, 18),
                (15, 17), (19, 21)],
            6 => [(1, 4), (3, 5), (6, 13), (7, 9), (8, 15), (12, 14), (16, 18), (17, 20)],
            7 => [(1, 2), (4, 10), (6, 12), (7, 8), (9, 15), (11, 17), (13, 14), (19, 20)],
            8 => [(1, 3), (2, 5), (6, 10), (8, 9), (11, 15), (12, 13), (16, 19), (18, 20)],
            9 => [(2, 3), (4, 8), (5, 7), (6, 9), (10, 11), (12, 15), (13, 17), (14, 16),
                (18, 19)],
            10 => [(4, 5), (6, 7), (8, 10), (9, 12), (11, 13), (14, 15), (16, 17)],
            11 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18)],
        ],
    }

    /// Minimum-depth network for 23 elements, depth 12.
    pub struct Minimum23 {
        name: "minimum_23",
        algorithm: Minimum,
        size: 23,
        lanes: 23,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22)],
            2 => [(0, 4), (1, 5), (2, 8), (3, 9), (6, 10), (7, 11), (12, 16), (13, 17),
                (14, 20), (15, 21), (18, 22)],
            3 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22)],
            4 => [(0, 12), (1, 13), (2, 4), (3, 5), (6, 8), (7, 9), (10, 22), (14, 16),
                (15, 17), (18, 20), (19, 21)],
            5 => [(1, 12), (2, 14), (3, 15), (4, 16), (5, 17), (6, 18), (7, 19), (8, 20),
                (9, 21), (11, 22)],
            6 => [(1, 2), (3, 14), (4, 6), (5, 7), (8, 13), (9, 20), (10, 15), (16, 18),
                (17, 19), (21, 22)],
            7 => [(3, 6), (5, 16), (7, 18), (8, 12), (9, 13), (10, 14), (11, 15), (17, 20)],
            8 => [(2, 3), (4, 8), (5, 12), (6, 10), (7, 14), (9, 16), (11, 18), (13, 17),
                (15, 19), (20, 21)],
            9 => [(2, 4), (5, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 18), (19, 21)],
            10 => [(3, 5), (6, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 17), (18, 20)],
            11 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
                (19, 20)],
        ],
    }

    /// Minimum-depth network for 25 elements, depth 13.
    pub struct Minimum25 {
        name: "minimum_25",
        algorithm: Minimum,
        size: 25,
        lanes: 25,
        stages: [
            0 => [(0, 13), (1, 6), (2, 8), (3, 20), (4, 7), (5, 22), (9, 16), (10, 15),
                (11, 14), (17, 23), (18, 21), (19, 24)],
            1 => [(0, 3), (1, 19), (4, 18), (5, 12), (6, 24), (7, 21), (8, 16), (9, 17),
                (10, 11), (13, 20), (14, 15)],
            2 => [(0, 10), (1, 5), (2, 17), (3, 12), (6, 11), (7, 16), (8, 23), (9, 18),
                (13, 22), (14, 19), (20, 24)],
            3 => [(0, 1), (2, 9), (3, 14), (4, 8), (5, 10), (6, 13), (7, 18), (11, 22),
                (12, 19), (15, 20), (16, 23), (17, 21)],
            4 => [(1, 5), (2, 4), (3, 6), (7, 9), (8, 17), (10, 15), (11, 14), (12, 13),
                (16, 18), (19, 22), (20, 24), (21, 23)],
            5 => [(0, 2), (1, 3), (4, 7), (5, 6), (8, 10), (9, 16), (11, 12), (13, 14),
                (15, 17), (18, 21), (19, 20), (22, 24)],
            6 => [(1, 2), (3, 4), (6, 18), (7, 19), (8, 11), (9, 12), (10, 15), (13, 16),
                (14, 17), (21, 22), (23, 24)],
            7 => [(1, 9), (2, 11), (4, 6), (5, 7), (10, 12), (13, 15), (14, 23), (18, 20),
                (19, 21)],
            8 => [(1, 3), (2, 8), (6, 14), (7, 13), (9, 10), (11, 19), (12, 18), (15, 16),
                (17, 23), (20, 22)],
            9 => [(2, 5), (4, 9), (6, 10), (7, 8), (11, 13), (12, 14), (15, 19), (16, 21),
                (17, 18), (20, 23)],
            10 => [(3, 5), (4, 7), (6, 11), (8, 9), (10, 12), (13, 15), (14, 19), (16, 17),
                (18, 21), (22, 23)],
            11 => [(2, 3), (5, 7), (6, 8), (9, 11), (10, 13), (12, 15), (14, 16), (17, 19),
                (18, 20)],
            12 => [(4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19),
                (20, 21)],
        ],
    }

    /// Minimum-depth network for 26 elements, depth 13.
    pub struct Minimum26 {
        name: "minimum_26",
        algorithm: Minimum,
        size: 26,
        lanes: 26,
        stages: [
            0 => [(0, 13), (1, 6), (2, 8), (3, 20), (4, 7), (5, 22), (9, 16), (10, 15),
                (11, 14), (12, 25), (17, 23), (18, 21), (19, 24)],
            1 => [(0, 3), (1, 19), (4, 18), (5, 12), (6, 24), (7, 21), (8, 16), (9, 17),
                (10, 11), (13, 20), (14, 15), (22, 25)],
            2 => [(0, 10), (1, 5), (2, 17), (3, 12), (6, 11), (7, 16), (8, 23), (9, 18),
                (13, 22), (14, 19), (15, 25), (20, 24)],
            3 => [(0, 1), (2, 9), (3, 14), (4, 8), (5, 10), (6, 13), (7, 18), (11, 22),
                (12, 19), (15, 20), (16, 23), (17, 21), (24, 25)],
            4 => [(1, 5), (2, 4), (3, 6), (7, 9), (8, 17), (10, 15), (11, 14), (12, 13),
                (16, 18), (19, 22), (20, 24), (21, 23)],
            5 => [(0, 2), (1, 3), (4, 7), (5, 6), (8, 10), (9, 16), (11, 12), (13, 14),
                (15, 17), (18, 21), (19, 20), (22, 24), (23, 25)],
            6 => [(1, 2), (3, 4), (6, 18), (7, 19), (8, 11), (9, 12), (10, 15), (13, 16),
                (14, 17), (21, 22), (23, 24)],
            7 => [(1, 9), (2, 11), (4, 6), (5, 7), (10, 12), (13, 15), (14, 23), (16, 24),
                (18, 20), (19, 21)],
            8 => [(1, 3), (2, 8), (6, 14), (7, 13), (9, 10), (11, 19), (12, 18), (15, 16),
                (17, 23), (22, 24)],
            9 => [(2, 5), (4, 9), (6, 10), (7, 8), (11, 13), (12, 14), (15, 19), (16, 21),
                (17, 18), (20, 23)],
            10 => [(3, 5), (4, 7), (6, 11), (8, 9), (10, 12), (13, 15), (14, 19), (16, 17),
                (18, 21), (20, 22)],
            11 => [(2, 3), (5, 7), (6, 8), (9, 11), (10, 13), (12, 15), (14, 16), (17, 19),
                (18, 20), (22, 23)],
            12 => [(4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19),
                (20, 21)],
        ],
    }

    /// Minimum-depth network for 27 elements, depth 14.
    pub struct Minimum27 {
        name: "minimum_27",
        algorithm: Minimum,
        size: 27,
        lanes: 27,
        stages: [
            0 => [(0, 9), (1, 6), (2, 4), (3, 7), (5, 8), (11, 16), (12, 15), (13, 23),
                (14, 24), (17, 18), (19, 20), (21, 26), (22, 25)],
            1 => [(0, 1), (3, 5), (4, 10), (6, 9), (7, 8), (11, 13), (12, 21), (14, 17),
                (15, 18), (16, 25), (19, 22), (20, 23), (24, 26)],
            2 => [(1, 3), (2, 5), (4, 7), (8, 10), (11, 19), (12, 14), (13, 22), (15, 24),
                (16, 20), (17, 21), (18, 26), (23, 25)],
            3 => [(0, 4), (1, 2), (3, 7), (5, 9), (6, 8), (11, 12), (13, 15), (14, 19),
                (16, 17), (18, 23), (20, 21), (22, 24), (25, 26)],
            4 => [(0, 1), (2, 6), (4, 5), (7, 8), (9, 10), (12, 14), (13, 16), (15, 19),
                (17, 20), (18, 22), (21, 24), (23, 25)],
            5 => [(0, 11), (2, 4), (3, 6), (5, 7), (8, 9), (12, 13), (14, 16), (15, 22),
                (17, 19), (18, 20), (21, 23), (24, 25)],
            6 => [(1, 2), (3, 4), (5, 6), (7, 8), (13, 14), (15, 16), (17, 18), (19, 20),
                (21, 22), (23, 24)],
            7 => [(1, 12), (2, 3), (4, 5), (6, 7), (15, 17), (16, 18), (19, 21), (20, 22)],
            8 => [(2, 13), (14, 15), (16, 17), (18, 19), (20, 21), (22, 23)],
            9 => [(3, 14), (4, 15), (5, 16), (6, 17), (7, 18), (8, 19), (9, 20), (10, 21)],
            10 => [(8, 11), (9, 12), (10, 13), (14, 22), (15, 23), (16, 24), (17, 25), (18, 26)],
            11 => [(4, 8), (5, 9), (6, 10), (7, 14), (11, 15), (12, 16), (13, 17), (18, 22),
                (19, 23), (20, 24), (21, 25)],
            12 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 11), (12, 14), (13, 15), (16, 18),
                (17, 19), (20, 22), (21, 23), (24, 26)],
            13 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26)],
        ],
    }

    /// Minimum-depth network for 28 elements, depth 14.
    pub struct Minimum28 {
        name: "minimum_28",
        algorithm: Minimum,
        size: 28,
        lanes: 28,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27)],
            1 => [(0, 26), (1, 27), (2, 24), (3, 25), (4, 22), (5, 23), (6, 20), (7, 21),
                (8, 18), (9, 19), (10, 16), (11, 17), (12, 14), (13, 15)],
            2 => [(0, 6), (1, 20), (2, 4), (3, 5), (7, 26), (10, 12), (11, 14), (13, 16),
                (15, 17), (21, 27), (22, 24), (23, 25)],
            3 => [(1, 18), (2, 10), (4, 22), (5, 23), (6, 8), (9, 26), (12, 13), (14, 15),
                (17, 25), (19, 21)],
            4 => [(0, 6), (3, 22), (4, 12), (5, 24), (7, 9), (11, 13), (14, 16), (15, 23),
                (18, 20), (21, 27)],
            5 => [(0, 2), (1, 4), (3, 11), (5, 13), (6, 10), (7, 8), (14, 22), (16, 24),
                (17, 21), (19, 20), (23, 26), (25, 27)],
            6 => [(1, 6), (3, 7), (4, 11), (5, 10), (8, 15), (9, 14), (12, 19), (13, 18),
                (16, 23), (17, 22), (20, 24), (21, 26)],
            7 => [(2, 9), (4, 8), (5, 13), (7, 17), (10, 20), (11, 15), (12, 16), (14, 22),
                (18, 25), (19, 23)],
            8 => [(2, 3), (4, 5), (7, 12), (8, 11), (10, 13), (14, 17), (15, 20), (16, 19),
                (22, 23), (24, 25)],
            9 => [(1, 2), (5, 6), (8, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 19),
                (21, 22), (25, 26)],
            10 => [(3, 5), (6, 9), (7, 8), (10, 12), (11, 13), (14, 16), (15, 17), (18, 21),
                (19, 20), (22, 24)],
            11 => [(2, 3), (4, 7), (5, 6), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 23), (21, 22), (24, 25)],
            12 => [(4, 5), (6, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
                (20, 21), (22, 23)],
            13 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
                (19, 20), (21, 22), (23, 24)],
        ],
    }

    /// Minimum-depth network for 29 elements, depth 14.
    pub struct Minimum29 {
        name: "minimum_29",
        algorithm: Minimum,
        size: 29,
        lanes: 29,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28)],
            3 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28)],
            4 => [(0, 16), (1, 8), (2, 4), (3, 12), (5, 10), (6, 9), (7, 14), (11, 13),
                (17, 24), (18, 20), (19, 28), (21, 26), (22, 25), (23, 27)],
            5 => [(1, 2), (3, 5), (4, 8), (6, 22), (7, 11), (9, 25), (10, 12), (13, 14),
                (17, 18), (19, 21), (20, 24), (26, 28)],
            6 => [(1, 17), (2, 18), (3, 19), (4, 20), (5, 10), (7, 23), (8, 24), (11, 27),
                (12, 28), (13, 25), (21, 26)],
            7 => [(3, 17), (4, 16), (5, 21), (6, 18), (7, 9), (8, 20), (10, 26), (11, 23),
                (14, 28), (15, 27), (22, 24)],
            8 => [(1, 4), (3, 8), (5, 16), (7, 17), (9, 21), (10, 22), (11, 19), (12, 20),
                (14, 24), (15, 26), (23, 28)],
            9 => [(2, 5), (7, 8), (9, 18), (11, 17), (12, 16), (13, 22), (14, 20), (15, 19),
                (23, 24)],
            10 => [(2, 4), (6, 12), (9, 16), (10, 11), (13, 17), (14, 18), (15, 22), (19, 25),
                (20, 21)],
            11 => [(5, 6), (8, 12), (9, 10), (11, 13), (14, 16), (15, 17), (18, 20), (19, 23),
                (21, 22), (25, 26)],
            12 => [(3, 5), (6, 7), (8, 9), (10, 12), (11, 14), (13, 16), (15, 18), (17, 20),
                (19, 21), (22, 23), (24, 25), (26, 28)],
            13 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
        ],
    }

    /// Minimum-depth network for 31 elements, depth 14.
    pub struct Minimum31 {
        name: "minimum_31",
        algorithm: Minimum,
        size: 31,
        lanes: 31,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30)],
            3 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30)],
            4 => [(0, 16), (1, 8), (2, 4), (3, 12), (5, 10), (6, 9), (7, 14), (11, 13),
                (17, 24), (18, 20), (19, 28), (21, 26), (22, 25), (23, 30), (27, 29)],
            5 => [(1, 2), (3, 5), (4, 8), (6, 22), (7, 11), (9, 25), (10, 12), (13, 14),
                (17, 18), (19, 21), (20, 24), (23, 27), (26, 28), (29, 30)],
            6 => [(1, 17), (2, 18), (3, 19), (4, 20), (5, 10), (7, 23), (8, 24), (11, 27),
                (12, 28), (13, 29), (14, 30), (21, 26)],
            7 => [(3, 17), (4, 16), (5, 21), (6, 18), (7, 9), (8, 20), (10, 26), (11, 23),
                (13, 25), (14, 28), (15, 27), (22, 24)],
            8 => [(1, 4), (3, 8), (5, 16), (7, 17), (9, 21), (10, 22), (11, 19), (12, 20),
                (14, 24), (15, 26), (23, 28), (27, 30)],
            9 => [(2, 5), (7, 8), (9, 18), (11, 17), (12, 16), (13, 22), (14, 20), (15, 19),
                (23, 24), (26, 29)],
            10 => [(2, 4), (6, 12), (9, 16), (10, 11), (13, 17), (14, 18), (15, 22), (19, 25),
                (20, 21), (27, 29)],
            11 => [(5, 6), (8, 12), (9, 10), (11, 13), (14, 16), (15, 17), (18, 20), (19, 23),
                (21, 22), (25, 26)],
            12 => [(3, 5), (6, 7), (8, 9), (10, 12), (11, 14), (13, 16), (15, 18), (17, 20),
                (19, 21), (22, 23), (24, 25), (26, 28)],
            13 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
        ],
    }
}
