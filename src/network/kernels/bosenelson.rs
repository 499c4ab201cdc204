//! Bose-Nelson networks.
//!
//! Deeper than the alternatives for most sizes but with the fewest
//! comparators per stage, which keeps permutes cheap on narrow lanes.

network! {
    /// Bose-Nelson network for 4 elements, depth 3.
    pub struct Bosenelson4 {
        name: "bosenelson_4",
        algorithm: BoseNelson,
        size: 4,
        lanes: 4,
        stages: [
            0 => [(0, 1), (2, 3)],
            1 => [(0, 2), (1, 3)],
            2 => [(1, 2)],
        ],
    }

    /// Bose-Nelson network for 7 elements, depth 7.
    pub struct Bosenelson7 {
        name: "bosenelson_7",
        algorithm: BoseNelson,
        size: 7,
        lanes: 7,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6)],
            1 => [(0, 2), (3, 5), (4, 6)],
            2 => [(0, 1), (2, 6), (4, 5)],
            3 => [(0, 4), (1, 5)],
            4 => [(0, 3), (2, 5)],
            5 => [(1, 3), (2, 4)],
            6 => [(2, 3)],
        ],
    }

    /// Bose-Nelson network for 8 elements, depth 7.
    pub struct Bosenelson8 {
        name: "bosenelson_8",
        algorithm: BoseNelson,
        size: 8,
        lanes: 8,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6)],
            3 => [(1, 5), (2, 6)],
            4 => [(1, 4), (3, 6)],
            5 => [(2, 4), (3, 5)],
            6 => [(3, 4)],
        ],
    }

    /// Bose-Nelson network for 9 elements, depth 11.
    pub struct Bosenelson9 {
        name: "bosenelson_9",
        algorithm: BoseNelson,
        size: 9,
        lanes: 9,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (7, 8)],
            1 => [(0, 2), (1, 3), (6, 8)],
            2 => [(1, 2), (5, 8), (6, 7)],
            3 => [(3, 8), (4, 7)],
            4 => [(4, 6), (5, 7)],
            5 => [(2, 7), (5, 6)],
            6 => [(0, 5), (1, 6), (3, 7)],
            7 => [(0, 4), (1, 5), (3, 6)],
            8 => [(1, 4), (2, 5)],
            9 => [(2, 4), (3, 5)],
            10 => [(3, 4)],
        ],
    }

    /// Bose-Nelson network for 10 elements, depth 11.
    pub struct Bosenelson10 {
        name: "bosenelson_10",
        algorithm: BoseNelson,
        size: 10,
        lanes: 10,
        stages: [
            0 => [(0, 1), (3, 4), (5, 6), (8, 9)],
            1 => [(2, 4), (7, 9)],
            2 => [(1, 4), (2, 3), (6, 9), (7, 8)],
            3 => [(0, 3), (4, 9), (5, 8)],
            4 => [(0, 2), (1, 3), (5, 7), (6, 8)],
            5 => [(0, 5), (1, 2), (3, 8), (6, 7)],
            6 => [(1, 6), (2, 7), (4, 8)],
            7 => [(1, 5), (3, 7)],
            8 => [(2, 5), (3, 6), (4, 7)],
            9 => [(3, 5), (4, 6)],
            10 => [(4, 5)],
        ],
    }

    /// Bose-Nelson network for 11 elements, depth 12.
    pub struct Bosenelson11 {
        name: "bosenelson_11",
        algorithm: BoseNelson,
        size: 11,
        lanes: 11,
        stages: [
            0 => [(0, 1), (3, 4), (6, 7), (9, 10)],
            1 => [(2, 4), (5, 7), (8, 10)],
            2 => [(1, 4), (2, 3), (5, 6), (7, 10), (8, 9)],
            3 => [(0, 3), (4, 10), (5, 8), (6, 9)],
            4 => [(0, 2), (1, 3), (6, 8), (7, 9)],
            5 => [(0, 6), (1, 2), (3, 9), (7, 8)],
            6 => [(0, 5), (1, 7), (2, 8), (4, 9)],
            7 => [(1, 6), (3, 8)],
            8 => [(1, 5), (3, 6), (4, 8)],
            9 => [(2, 5), (4, 7)],
            10 => [(3, 5), (4, 6)],
            11 => [(4, 5)],
        ],
    }

    /// Bose-Nelson network for 12 elements, depth 12.
    pub struct Bosenelson12 {
        name: "bosenelson_12",
        algorithm: BoseNelson,
        size: 12,
        lanes: 12,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (10, 11)],
            1 => [(0, 2), (3, 5), (6, 8), (9, 11)],
            2 => [(0, 1), (2, 5), (3, 4), (6, 7), (8, 11), (9, 10)],
            3 => [(0, 3), (1, 4), (5, 11), (6, 9), (7, 10)],
            4 => [(0, 6), (1, 3), (2, 4), (7, 9), (8, 10)],
            5 => [(1, 7), (2, 3), (4, 10), (8, 9)],
            6 => [(1, 6), (2, 8), (3, 9), (5, 10)],
            7 => [(2, 7), (4, 9)],
            8 => [(2, 6), (4, 7), (5, 9)],
            9 => [(3, 6), (5, 8)],
            10 => [(4, 6), (5, 7)],
            11 => [(5, 6)],
        ],
    }

    /// Bose-Nelson network for 13 elements, depth 14.
    pub struct Bosenelson13 {
        name: "bosenelson_13",
        algorithm: BoseNelson,
        size: 13,
        lanes: 13,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (9, 10), (11, 12)],
            1 => [(0, 2), (3, 5), (6, 8), (9, 11), (10, 12)],
            2 => [(0, 1), (2, 5), (3, 4), (6, 7), (8, 12), (10, 11)],
            3 => [(0, 3), (1, 4), (5, 12), (6, 10), (7, 11)],
            4 => [(1, 3), (2, 4), (6, 9), (8, 11)],
            5 => [(2, 3), (4, 11), (7, 9), (8, 10)],
            6 => [(0, 7), (3, 10), (5, 11), (8, 9)],
            7 => [(0, 6), (1, 8), (2, 9), (4, 10)],
            8 => [(1, 6), (2, 8), (5, 10)],
            9 => [(2, 7), (4, 8), (5, 9)],
            10 => [(2, 6), (3, 7), (5, 8)],
            11 => [(3, 6), (5, 7)],
            12 => [(4, 6)],
            13 => [(5, 6)],
        ],
    }

    /// Bose-Nelson network for 14 elements, depth 14.
    pub struct Bosenelson14 {
        name: "bosenelson_14",
        algorithm: BoseNelson,
        size: 14,
        lanes: 14,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (8, 9), (10, 11), (12, 13)],
            1 => [(0, 2), (3, 5), (4, 6), (7, 9), (10, 12), (11, 13)],
            2 => [(0, 1), (2, 6), (4, 5), (7, 8), (9, 13), (11, 12)],
            3 => [(0, 4), (1, 5), (6, 13), (7, 11), (8, 12)],
            4 => [(0, 3), (2, 5), (7, 10), (9, 12)],
            5 => [(0, 7), (1, 3), (2, 4), (5, 12), (8, 10), (9, 11)],
            6 => [(1, 8), (2, 3), (4, 11), (6, 12), (9, 10)],
            7 => [(1, 7), (2, 9), (3, 10), (6, 11)],
            8 => [(2, 8), (4, 10)],
            9 => [(2, 7), (4, 8), (5, 10)],
            10 => [(3, 7), (5, 9), (6, 10)],
            11 => [(4, 7), (6, 9)],
            12 => [(5, 7), (6, 8)],
            13 => [(6, 7)],
        ],
    }

    /// Bose-Nelson network for 15 elements, depth 15.
    pub struct Bosenelson15 {
        name: "bosenelson_15",
        algorithm: BoseNelson,
        size: 15,
        lanes: 15,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
            1 => [(0, 2), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14)],
            2 => [(0, 1), (2, 6), (4, 5), (7, 11), (8, 9), (10, 14), (12, 13)],
            3 => [(0, 4), (1, 5), (6, 14), (8, 12), (9, 13)],
            4 => [(0, 3), (2, 5), (8, 11), (10, 13)],
            5 => [(0, 8), (1, 3), (2, 4), (5, 13), (9, 11), (10, 12)],
            6 => [(0, 7), (1, 9), (2, 3), (4, 12), (6, 13), (10, 11)],
            7 => [(1, 7), (2, 10), (3, 11), (6, 12)],
            8 => [(2, 9), (4, 11)],
            9 => [(2, 8), (5, 11)],
            10 => [(2, 7), (4, 8), (5, 9), (6, 11)],
            11 => [(3, 7), (6, 10)],
            12 => [(4, 7), (6, 9)],
            13 => [(5, 7), (6, 8)],
            14 => [(6, 7)],
        ],
    }

    /// Bose-Nelson network for 16 elements, depth 15.
    pub struct Bosenelson16 {
        name: "bosenelson_16",
        algorithm: BoseNelson,
        size: 16,
        lanes: 16,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10), (11, 15), (13, 14)],
            3 => [(0, 8), (1, 5), (2, 6), (7, 15), (9, 13), (10, 14)],
            4 => [(1, 4), (3, 6), (9, 12), (11, 14)],
            5 => [(1, 9), (2, 4), (3, 5), (6, 14), (10, 12), (11, 13)],
            6 => [(1, 8), (2, 10), (3, 4), (5, 13), (7, 14), (11, 12)],
            7 => [(2, 8), (3, 11), (4, 12), (7, 13)],
            8 => [(3, 10), (5, 12)],
            9 => [(3, 9), (6, 12)],
            10 => [(3, 8), (5, 9), (6, 10), (7, 12)],
            11 => [(4, 8), (7, 11)],
            12 => [(5, 8), (7, 10)],
            13 => [(6, 8), (7, 9)],
            14 => [(7, 8)],
        ],
    }

    /// Bose-Nelson network for 17 elements, depth 20.
    pub struct Bosenelson17 {
        name: "bosenelson_17",
        algorithm: BoseNelson,
        size: 17,
        lanes: 17,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (15, 16)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (14, 16)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (9, 10), (13, 16), (14, 15)],
            3 => [(1, 5), (2, 6), (11, 16), (12, 15)],
            4 => [(1, 4), (3, 6), (7, 16), (12, 14), (13, 15)],
            5 => [(2, 4), (3, 5), (10, 15), (13, 14)],
            6 => [(3, 4), (8, 13), (9, 14), (11, 15)],
            7 => [(6, 15), (8, 12), (9, 13), (11, 14)],
            8 => [(5, 14), (7, 15), (9, 12), (10, 13)],
            9 => [(0, 9), (7, 14), (10, 12), (11, 13)],
            10 => [(0, 8), (1, 10), (4, 13), (11, 12)],
            11 => [(1, 9), (2, 11), (3, 12), (5, 13)],
            12 => [(1, 8), (2, 9), (3, 11), (6, 13)],
            13 => [(2, 8), (3, 10), (6, 11), (7, 13)],
            14 => [(3, 9), (5, 10), (7, 12)],
            15 => [(3, 8), (4, 9), (7, 11)],
            16 => [(4, 8), (5, 9), (7, 10)],
            17 => [(5, 8), (6, 9)],
            18 => [(6, 8), (7, 9)],
            19 => [(7, 8)],
        ],
    }

    /// Bose-Nelson network for 18 elements, depth 20.
    pub struct Bosenelson18 {
        name: "bosenelson_18",
        algorithm: BoseNelson,
        size: 18,
        lanes: 18,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (7, 8), (9, 10), (11, 12), (13, 14), (16, 17)],
            1 => [(0, 2), (1, 3), (6, 8), (9, 11), (10, 12), (15, 17)],
            2 => [(1, 2), (5, 8), (6, 7), (10, 11), (14, 17), (15, 16)],
            3 => [(3, 8), (4, 7), (12, 17), (13, 16)],
            4 => [(4, 6), (5, 7), (8, 17), (13, 15), (14, 16)],
            5 => [(2, 7), (5, 6), (11, 16), (14, 15)],
            6 => [(0, 5), (1, 6), (3, 7), (9, 14), (10, 15), (12, 16)],
            7 => [(0, 4), (1, 5), (3, 6), (7, 16), (9, 13), (10, 14), (12, 15)],
            8 => [(0, 9), (1, 4), (2, 5), (6, 15), (8, 16), (10, 13), (11, 14)],
            9 => [(1, 10), (2, 4), (3, 5), (7, 15), (11, 13), (12, 14)],
            10 => [(1, 9), (2, 11), (3, 4), (5, 14), (8, 15), (12, 13)],
            11 => [(2, 9), (3, 12), (4, 13), (7, 14)],
            12 => [(3, 11), (5, 13), (8, 14)],
            13 => [(3, 10), (6, 13)],
            14 => [(3, 9), (5, 10), (6, 11), (7, 13)],
            15 => [(4, 9), (7, 12), (8, 13)],
            16 => [(5, 9), (7, 11), (8, 12)],
            17 => [(6, 9), (7, 10), (8, 11)],
            18 => [(7, 9), (8, 10)],
            19 => [(8, 9)],
        ],
    }

    /// Bose-Nelson network for 22 elements, depth 23.
    pub struct Bosenelson22 {
        name: "bosenelson_22",
        algorithm: BoseNelson,
        size: 22,
        lanes: 22,
        stages: [
            0 => [(0, 1), (3, 4), (6, 7), (9, 10), (11, 12), (14, 15), (17, 18), (20, 21)],
            1 => [(2, 4), (5, 7), (8, 10), (13, 15), (16, 18), (19, 21)],
            2 => [(1, 4), (2, 3), (5, 6), (7, 10), (8, 9), (12, 15), (13, 14), (16, 17),
                (18, 21), (19, 20)],
            3 => [(0, 3), (4, 10), (5, 8), (6, 9), (11, 14), (15, 21), (16, 19), (17, 20)],
            4 => [(0, 2), (1, 3), (6, 8), (7, 9), (10, 21), (11, 13), (12, 14), (17, 19),
                (18, 20)],
            5 => [(0, 6), (1, 2), (3, 9), (7, 8), (11, 17), (12, 13), (14, 20), (18, 19)],
            6 => [(0, 5), (1, 7), (2, 8), (4, 9), (11, 16), (12, 18), (13, 19), (15, 20)],
            7 => [(0, 11), (1, 6), (3, 8), (9, 20), (12, 17), (14, 19)],
            8 => [(1, 5), (3, 6), (4, 8), (10, 20), (12, 16), (14, 17), (15, 19)],
            9 => [(1, 12), (2, 5), (4, 7), (8, 19), (13, 16), (15, 18)],
            10 => [(1, 11), (2, 13), (3, 5), (4, 6), (7, 18), (9, 19), (14, 16), (15, 17)],
            11 => [(2, 11), (3, 14), (4, 5), (6, 17), (10, 19), (15, 16)],
            12 => [(3, 13), (4, 15), (5, 16), (7, 17), (10, 18)],
            13 => [(3, 12), (4, 14), (6, 16), (9, 17)],
            14 => [(3, 11), (4, 13), (7, 16), (10, 17)],
            15 => [(4, 12), (7, 13), (8, 16)],
            16 => [(4, 11), (6, 12), (8, 14), (9, 16)],
            17 => [(5, 11), (7, 12), (9, 15), (10, 16)],
            18 => [(6, 11), (9, 14), (10, 15)],
            19 => [(7, 11), (9, 12), (10, 14)],
            20 => [(8, 11), (10, 13)],
            21 => [(9, 11), (10, 12)],
            22 => [(10, 11)],
        ],
    }

    /// Bose-Nelson network for 24 elements, depth 24.
    pub struct Bosenelson24 {
        name: "bosenelson_24",
        algorithm: BoseNelson,
        size: 24,
        lanes: 24,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (10, 11), (13, 14), (16, 17), (19, 20), (22, 23)],
            1 => [(0, 2), (3, 5), (6, 8), (9, 11), (12, 14), (15, 17), (18, 20), (21, 23)],
            2 => [(0, 1), (2, 5), (3, 4), (6, 7), (8, 11), (9, 10), (12, 13), (14, 17),
                (15, 16), (18, 19), (20, 23), (21, 22)],
            3 => [(0, 3), (1, 4), (5, 11), (6, 9), (7, 10), (12, 15), (13, 16), (17, 23),
                (18, 21), (19, 22)],
            4 => [(0, 6), (1, 3), (2, 4), (7, 9), (8, 10), (11, 23), (12, 18), (13, 15),
                (14, 16), (19, 21), (20, 22)],
            5 => [(0, 12), (1, 7), (2, 3), (4, 10), (8, 9), (13, 19), (14, 15), (16, 22),
                (20, 21)],
            6 => [(1, 6), (2, 8), (3, 9), (5, 10), (13, 18), (14, 20), (15, 21), (17, 22)],
            7 => [(1, 13), (2, 7), (4, 9), (10, 22), (14, 19), (16, 21)],
            8 => [(1, 12), (2, 6), (4, 7), (5, 9), (11, 22), (14, 18), (16, 19), (17, 21)],
            9 => [(2, 14), (3, 6), (5, 8), (9, 21), (15, 18), (17, 20)],
            10 => [(2, 13), (3, 15), (4, 6), (5, 7), (8, 20), (10, 21), (16, 18), (17, 19)],
            11 => [(2, 12), (4, 16), (5, 6), (7, 19), (11, 21), (17, 18)],
            12 => [(3, 12), (4, 15), (5, 17), (6, 18), (8, 19), (11, 20)],
            13 => [(4, 13), (5, 16), (7, 18), (10, 19)],
            14 => [(4, 12), (5, 15), (8, 18), (11, 19)],
            15 => [(5, 14), (9, 18)],
            16 => [(5, 13), (8, 14), (9, 15), (10, 18)],
            17 => [(5, 12), (7, 13), (10, 16), (11, 18)],
            18 => [(6, 12), (8, 13), (10, 15), (11, 17)],
            19 => [(7, 12), (10, 13), (11, 16)],
            20 => [(8, 12), (11, 15)],
            21 => [(9, 12), (11, 14)],
            22 => [(10, 12), (11, 13)],
            23 => [(11, 12)],
        ],
    }

    /// Bose-Nelson network for 26 elements, depth 27.
    pub struct Bosenelson26 {
        name: "bosenelson_26",
        algorithm: BoseNelson,
        size: 26,
        lanes: 26,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (9, 10), (11, 12), (14, 15), (17, 18), (20, 21),
                (22, 23), (24, 25)],
            1 => [(0, 2), (3, 5), (6, 8), (9, 11), (10, 12), (13, 15), (16, 18), (19, 21),
                (22, 24), (23, 25)],
            2 => [(0, 1), (2, 5), (3, 4), (6, 7), (8, 12), (10, 11), (13, 14), (15, 18),
                (16, 17), (19, 20), (21, 25), (23, 24)],
            3 => [(0, 3), (1, 4), (5, 12), (6, 10), (7, 11), (13, 16), (14, 17), (18, 25),
                (19, 23), (20, 24)],
            4 => [(1, 3), (2, 4), (6, 9), (8, 11), (12, 25), (14, 16), (15, 17), (19, 22),
                (21, 24)],
            5 => [(2, 3), (4, 11), (7, 9), (8, 10), (15, 16), (17, 24), (20, 22), (21, 23)],
            6 => [(0, 7), (3, 10), (5, 11), (8, 9), (13, 20), (16, 23), (18, 24), (21, 22)],
            7 => [(0, 6), (1, 8), (2, 9), (4, 10), (11, 24), (13, 19), (14, 21), (15, 22),
                (17, 23)],
            8 => [(0, 13), (1, 6), (2, 8), (5, 10), (12, 24), (14, 19), (15, 21), (18, 23)],
            9 => [(1, 14), (2, 7), (4, 8), (5, 9), (10, 23), (15, 20), (17, 21), (18, 22)],
            10 => [(1, 13), (2, 6), (3, 7), (5, 8), (9, 22), (12, 23), (15, 19), (16, 20),
                (18, 21)],
            11 => [(2, 15), (3, 6), (5, 7), (8, 21), (10, 22), (16, 19), (18, 20)],
            12 => [(2, 14), (3, 16), (4, 6), (7, 20), (11, 22), (17, 19)],
            13 => [(2, 13), (4, 17), (5, 6), (8, 20), (11, 21), (12, 22), (18, 19)],
            14 => [(3, 13), (4, 16), (5, 18), (6, 19), (10, 20), (12, 21)],
            15 => [(4, 14), (5, 17), (7, 19), (12, 20)],
            16 => [(4, 13), (5, 16), (8, 19)],
            17 => [(5, 15), (9, 19)],
            18 => [(5, 14), (8, 15), (9, 16), (10, 19)],
            19 => [(5, 13), (7, 14), (10, 17), (11, 19)],
            20 => [(6, 13), (8, 14), (10, 16), (11, 18), (12, 19)],
            21 => [(7, 13), (10, 14), (11, 16), (12, 18)],
            22 => [(8, 13), (11, 15), (12, 17)],
            23 => [(9, 13), (12, 16)],
            24 => [(10, 13), (12, 15)],
            25 => [(11, 13), (12, 14)],
            26 => [(12, 13)],
        ],
    }

    /// Bose-Nelson network for 27 elements, depth 28.
    pub struct Bosenelson27 {
        name: "bosenelson_27",
        algorithm: BoseNelson,
        size: 27,
        lanes: 27,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (9, 10), (11, 12), (14, 15), (16, 17), (18, 19),
                (21, 22), (23, 24), (25, 26)],
            1 => [(0, 2), (3, 5), (6, 8), (9, 11), (10, 12), (13, 15), (16, 18), (17, 19),
                (20, 22), (23, 25), (24, 26)],
            2 => [(0, 1), (2, 5), (3, 4), (6, 7), (8, 12), (10, 11), (13, 14), (15, 19),
                (17, 18), (20, 21), (22, 26), (24, 25)],
            3 => [(0, 3), (1, 4), (5, 12), (6, 10), (7, 11), (13, 17), (14, 18), (19, 26),
                (20, 24), (21, 25)],
            4 => [(1, 3), (2, 4), (6, 9), (8, 11), (12, 26), (13, 16), (15, 18), (20, 23),
                (22, 25)],
            5 => [(2, 3), (4, 11), (7, 9), (8, 10), (13, 20), (14, 16), (15, 17), (18, 25),
                (21, 23), (22, 24)],
            6 => [(0, 7), (3, 10), (5, 11), (8, 9), (14, 21), (15, 16), (17, 24), (19, 25),
                (22, 23)],
            7 => [(0, 6), (1, 8), (2, 9), (4, 10), (11, 25), (14, 20), (15, 22), (16, 23),
                (19, 24)],
            8 => [(0, 14), (1, 6), (2, 8), (5, 10), (12, 25), (15, 21), (17, 23)],
            9 => [(0, 13), (2, 7), (4, 8), (5, 9), (10, 24), (15, 20), (17, 21), (18, 23)],
            10 => [(1, 15), (2, 6), (3, 7), (5, 8), (12, 24), (16, 20), (18, 22), (19, 23)],
            11 => [(1, 13), (2, 16), (3, 6), (5, 7), (9, 23), (17, 20), (19, 22)],
            12 => [(2, 15), (3, 17), (4, 6), (8, 22), (10, 23), (18, 20), (19, 21)],
            13 => [(2, 14), (4, 18), (5, 6), (7, 21), (11, 23), (19, 20)],
            14 => [(2, 13), (3, 14), (4, 17), (5, 19), (6, 20), (8, 21), (11, 22), (12, 23)],
            15 => [(3, 13), (4, 15), (5, 18), (7, 20), (10, 21), (12, 22)],
            16 => [(4, 13), (5, 17), (8, 20), (12, 21)],
            17 => [(5, 16), (9, 20)],
            18 => [(5, 15), (9, 16), (10, 20)],
            19 => [(5, 14), (8, 15), (10, 17), (11, 20)],
            20 => [(5, 13), (7, 14), (10, 16), (11, 18), (12, 20)],
            21 => [(6, 13), (8, 14), (11, 16), (12, 19)],
            22 => [(7, 13), (10, 14), (11, 15), (12, 18)],
            23 => [(8, 13), (12, 17)],
            24 => [(9, 13), (12, 16)],
            25 => [(10, 13), (12, 15)],
            26 => [(11, 13), (12, 14)],
            27 => [(12, 13)],
        ],
    }

    /// Bose-Nelson network for 28 elements, depth 28.
    pub struct Bosenelson28 {
        name: "bosenelson_28",
        algorithm: BoseNelson,
        size: 28,
        lanes: 28,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (8, 9), (10, 11), (12, 13), (15, 16), (17, 18),
                (19, 20), (22, 23), (24, 25), (26, 27)],
            1 => [(0, 2), (3, 5), (4, 6), (7, 9), (10, 12), (11, 13), (14, 16), (17, 19),
                (18, 20), (21, 23), (24, 26), (25, 27)],
            2 => [(0, 1), (2, 6), (4, 5), (7, 8), (9, 13), (11, 12), (14, 15), (16, 20),
                (18, 19), (21, 22), (23, 27), (25, 26)],
            3 => [(0, 4), (1, 5), (6, 13), (7, 11), (8, 12), (14, 18), (15, 19), (20, 27),
                (21, 25), (22, 26)],
            4 => [(0, 3), (2, 5), (7, 10), (9, 12), (13, 27), (14, 17), (16, 19), (21, 24),
                (23, 26)],
            5 => [(0, 7), (1, 3), (2, 4), (5, 12), (8, 10), (9, 11), (14, 21), (15, 17),
                (16, 18), (19, 26), (22, 24), (23, 25)],
            6 => [(0, 14), (1, 8), (2, 3), (4, 11), (6, 12), (9, 10), (15, 22), (16, 17),
                (18, 25), (20, 26), (23, 24)],
            7 => [(1, 7), (2, 9), (3, 10), (6, 11), (12, 26), (15, 21), (16, 23), (17, 24),
                (20, 25)],
            8 => [(1, 15), (2, 8), (4, 10), (11, 25), (13, 26), (16, 22), (18, 24)],
            9 => [(1, 14), (2, 7), (4, 8), (5, 10), (13, 25), (16, 21), (18, 22), (19, 24)],
            10 => [(2, 16), (3, 7), (5, 9), (6, 10), (17, 21), (19, 23), (20, 24)],
            11 => [(2, 15), (3, 17), (4, 7), (6, 9), (10, 24), (18, 21), (20, 23)],
            12 => [(2, 14), (4, 18), (5, 7), (6, 8), (9, 23), (11, 24), (19, 21), (20, 22)],
            13 => [(3, 14), (4, 17), (5, 19), (6, 7), (8, 22), (12, 24), (20, 21)],
            14 => [(4, 15), (5, 17), (6, 20), (7, 21), (9, 22), (12, 23), (13, 24)],
            15 => [(4, 14), (5, 16), (6, 19), (8, 21), (11, 22), (13, 23)],
            16 => [(5, 14), (6, 18), (9, 21), (13, 22)],
            17 => [(6, 17), (10, 21)],
            18 => [(6, 16), (10, 17), (11, 21)],
            19 => [(6, 15), (9, 16), (11, 18), (12, 21)],
            20 => [(6, 14), (8, 15), (11, 17), (12, 19), (13, 21)],
            21 => [(7, 14), (9, 15), (12, 17), (13, 20)],
            22 => [(8, 14), (11, 15), (12, 16), (13, 19)],
            23 => [(9, 14), (13, 18)],
            24 => [(10, 14), (13, 17)],
            25 => [(11, 14), (13, 16)],
            26 => [(12, 14), (13, 15)],
            27 => [(13, 14)],
        ],
    }

    /// Bose-Nelson network for 31 elements, depth 31.
    pub struct Bosenelson31 {
        name: "bosenelson_31",
        algorithm: BoseNelson,
        size: 31,
        lanes: 31,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30)],
            1 => [(0, 2), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14), (15, 17),
                (16, 18), (19, 21), (20, 22), (23, 25), (24, 26), (27, 29), (28, 30)],
            2 => [(0, 1), (2, 6), (4, 5), (7, 11), (8, 9), (10, 14), (12, 13), (15, 19),
                (16, 17), (18, 22), (20, 21), (23, 27), (24, 25), (26, 30), (28, 29)],
            3 => [(0, 4), (1, 5), (6, 14), (8, 12), (9, 13), (15, 23), (16, 20), (17, 21),
                (22, 30), (24, 28), (25, 29)],
            4 => [(0, 3), (2, 5), (8, 11), (10, 13), (14, 30), (16, 19), (18, 21), (24, 27),
                (26, 29)],
            5 => [(0, 8), (1, 3), (2, 4), (5, 13), (9, 11), (10, 12), (16, 24), (17, 19),
                (18, 20), (21, 29), (25, 27), (26, 28)],
            6 => [(0, 7), (1, 9), (2, 3), (4, 12), (6, 13), (10, 11), (16, 23), (17, 25),
                (18, 19), (20, 28), (22, 29), (26, 27)],
            7 => [(0, 16), (1, 7), (2, 10), (3, 11), (6, 12), (13, 29), (17, 23), (18, 26),
                (19, 27), (22, 28)],
            8 => [(0, 15), (1, 17), (2, 9), (4, 11), (12, 28), (14, 29), (18, 25), (20, 27)],
            9 => [(1, 15), (2, 8), (5, 11), (14, 28), (18, 24), (21, 27)],
            10 => [(2, 7), (4, 8), (5, 9), (6, 11), (18, 23), (20, 24), (21, 25), (22, 27)],
            11 => [(2, 18), (3, 7), (6, 10), (11, 27), (19, 23), (22, 26)],
            12 => [(2, 17), (3, 19), (4, 7), (6, 9), (10, 26), (12, 27), (20, 23), (22, 25)],
            13 => [(2, 16), (4, 20), (5, 7), (6, 8), (9, 25), (13, 27), (21, 23), (22, 24)],
            14 => [(2, 15), (4, 19), (5, 21), (6, 7), (8, 24), (10, 25), (14, 27), (22, 23)],
            15 => [(3, 15), (4, 16), (5, 19), (6, 22), (7, 23), (10, 24), (13, 25), (14, 26)],
            16 => [(4, 15), (5, 17), (6, 21), (8, 23), (12, 24), (14, 25)],
            17 => [(5, 15), (6, 20), (9, 23), (14, 24)],
            18 => [(6, 19), (10, 23)],
            19 => [(6, 18), (11, 23)],
            20 => [(6, 17), (10, 18), (11, 19), (12, 23)],
            21 => [(6, 16), (9, 17), (12, 20), (13, 23)],
            22 => [(6, 15), (8, 16), (10, 17), (12, 19), (13, 21), (14, 23)],
            23 => [(7, 15), (10, 16), (13, 19), (14, 22)],
            24 => [(8, 15), (12, 16), (13, 17), (14, 21)],
            25 => [(9, 15), (14, 20)],
            26 => [(10, 15), (14, 19)],
            27 => [(11, 15), (14, 18)],
            28 => [(12, 15), (14, 17)],
            29 => [(13, 15), (14, 16)],
            30 => [(14, 15)],
        ],
    }
}
