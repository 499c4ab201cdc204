//! Batcher merge-exchange networks.

network! {
    /// Batcher merge-exchange network for 4 elements, depth 3.
    pub struct Batcher4 {
        name: "batcher_4",
        algorithm: Batcher,
        size: 4,
        lanes: 4,
        stages: [
            0 => [(0, 2), (1, 3)],
            1 => [(0, 1), (2, 3)],
            2 => [(1, 2)],
        ],
    }

    /// Batcher merge-exchange network for 5 elements, depth 5.
    pub struct Batcher5 {
        name: "batcher_5",
        algorithm: Batcher,
        size: 5,
        lanes: 5,
        stages: [
            0 => [(0, 4), (1, 3)],
            1 => [(0, 2)],
            2 => [(0, 1), (2, 4)],
            3 => [(1, 4), (2, 3)],
            4 => [(1, 2), (3, 4)],
        ],
    }

    /// Batcher merge-exchange network for 6 elements, depth 6.
    pub struct Batcher6 {
        name: "batcher_6",
        algorithm: Batcher,
        size: 6,
        lanes: 6,
        stages: [
            0 => [(0, 4), (1, 5)],
            1 => [(0, 2), (1, 3)],
            2 => [(0, 1), (2, 4), (3, 5)],
            3 => [(2, 3), (4, 5)],
            4 => [(1, 4)],
            5 => [(1, 2), (3, 4)],
        ],
    }

    /// Batcher merge-exchange network for 7 elements, depth 6.
    pub struct Batcher7 {
        name: "batcher_7",
        algorithm: Batcher,
        size: 7,
        lanes: 7,
        stages: [
            0 => [(0, 4), (1, 5), (2, 6)],
            1 => [(0, 2), (1, 3), (4, 6)],
            2 => [(0, 1), (2, 4), (3, 5)],
            3 => [(2, 3), (4, 5)],
            4 => [(1, 4), (3, 6)],
            5 => [(1, 2), (3, 4), (5, 6)],
        ],
    }

    /// Batcher merge-exchange network for 8 elements, depth 6.
    pub struct Batcher8 {
        name: "batcher_8",
        algorithm: Batcher,
        size: 8,
        lanes: 8,
        stages: [
            0 => [(0, 4), (1, 5), (2, 6), (3, 7)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            2 => [(0, 1), (2, 4), (3, 5), (6, 7)],
            3 => [(2, 3), (4, 5)],
            4 => [(1, 4), (3, 6)],
            5 => [(1, 2), (3, 4), (5, 6)],
        ],
    }

    /// Batcher merge-exchange network for 9 elements, depth 8.
    pub struct Batcher9 {
        name: "batcher_9",
        algorithm: Batcher,
        size: 9,
        lanes: 9,
        stages: [
            0 => [(0, 8), (1, 5), (2, 6), (3, 7)],
            1 => [(0, 4), (1, 3), (5, 7)],
            2 => [(0, 2), (3, 5), (4, 8)],
            3 => [(0, 1), (2, 8), (4, 6)],
            4 => [(2, 4), (6, 8)],
            5 => [(1, 8), (2, 3), (4, 5), (6, 7)],
            6 => [(1, 4), (3, 6), (5, 8)],
            7 => [(1, 2), (3, 4), (5, 6), (7, 8)],
        ],
    }

    /// Batcher merge-exchange network for 10 elements, depth 9.
    pub struct Batcher10 {
        name: "batcher_10",
        algorithm: Batcher,
        size: 10,
        lanes: 10,
        stages: [
            0 => [(0, 8), (1, 9), (2, 6), (3, 7)],
            1 => [(0, 4), (1, 5)],
            2 => [(0, 2), (1, 3), (4, 8), (5, 9)],
            3 => [(0, 1), (2, 8), (3, 9), (4, 6), (5, 7)],
            4 => [(2, 4), (3, 5), (6, 8), (7, 9)],
            5 => [(2, 3), (4, 5), (6, 7), (8, 9)],
            6 => [(1, 8), (3, 6)],
            7 => [(1, 4), (5, 8)],
            8 => [(1, 2), (3, 4), (5, 6), (7, 8)],
        ],
    }

    /// Batcher merge-exchange network for 11 elements, depth 10.
    pub struct Batcher11 {
        name: "batcher_11",
        algorithm: Batcher,
        size: 11,
        lanes: 11,
        stages: [
            0 => [(0, 8), (1, 9), (2, 10), (3, 7)],
            1 => [(0, 4), (1, 5), (2, 6)],
            2 => [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10)],
            3 => [(0, 1), (3, 9), (4, 6), (5, 7), (8, 10)],
            4 => [(2, 8), (3, 5), (7, 9)],
            5 => [(2, 4), (6, 8)],
            6 => [(2, 3), (4, 5), (6, 7), (8, 9)],
            7 => [(1, 8), (3, 10)],
            8 => [(1, 4), (3, 6), (5, 8), (7, 10)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)],
        ],
    }

    /// Batcher merge-exchange network for 12 elements, depth 10.
    pub struct Batcher12 {
        name: "batcher_12",
        algorithm: Batcher,
        size: 12,
        lanes: 12,
        stages: [
            0 => [(0, 8), (1, 9), (2, 10), (3, 11)],
            1 => [(0, 4), (1, 5), (2, 6), (3, 7)],
            2 => [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11)],
            3 => [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11)],
            4 => [(2, 8), (3, 9), (10, 11)],
            5 => [(2, 4), (3, 5), (6, 8), (7, 9)],
            6 => [(2, 3), (4, 5), (6, 7), (8, 9)],
            7 => [(1, 8), (3, 10)],
            8 => [(1, 4), (3, 6), (5, 8), (7, 10)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)],
        ],
    }

    /// Batcher merge-exchange network for 13 elements, depth 10.
    pub struct Batcher13 {
        name: "batcher_13",
        algorithm: Batcher,
        size: 13,
        lanes: 13,
        stages: [
            0 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12)],
            1 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12)],
            2 => [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11)],
            3 => [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11)],
            4 => [(2, 8), (3, 9), (6, 12)],
            5 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12)],
            6 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11)],
            7 => [(1, 8), (3, 10), (5, 12)],
            8 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
        ],
    }

    /// Batcher merge-exchange network for 14 elements, depth 10.
    pub struct Batcher14 {
        name: "batcher_14",
        algorithm: Batcher,
        size: 14,
        lanes: 14,
        stages: [
            0 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13)],
            1 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13)],
            2 => [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11)],
            3 => [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11)],
            4 => [(2, 8), (3, 9), (6, 12), (7, 13)],
            5 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
            6 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
            7 => [(1, 8), (3, 10), (5, 12)],
            8 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
        ],
    }

    /// Batcher merge-exchange network for 16 elements, depth 10.
    pub struct Batcher16 {
        name: "batcher_16",
        algorithm: Batcher,
        size: 16,
        lanes: 16,
        stages: [
            0 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
            1 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15)],
            2 => [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11), (12, 14), (13, 15)],
            3 => [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11), (14, 15)],
            4 => [(2, 8), (3, 9), (6, 12), (7, 13)],
            5 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
            6 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
            7 => [(1, 8), (3, 10), (5, 12), (7, 14)],
            8 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
        ],
    }

    /// Batcher merge-exchange network for 17 elements, depth 12.
    pub struct Batcher17 {
        name: "batcher_17",
        algorithm: Batcher,
        size: 17,
        lanes: 17,
        stages: [
            0 => [(0, 16), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
            1 => [(0, 8), (1, 5), (2, 6), (3, 7), (9, 13), (10, 14), (11, 15)],
            2 => [(0, 4), (1, 3), (5, 9), (6, 10), (7, 11), (8, 16), (13, 15)],
            3 => [(0, 2), (4, 16), (5, 7), (8, 12), (9, 11)],
            4 => [(0, 1), (3, 9), (4, 8), (7, 13), (12, 16)],
            5 => [(2, 16), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14)],
            6 => [(2, 8), (6, 12), (10, 16)],
            7 => [(2, 4), (6, 8), (10, 12), (14, 16)],
            8 => [(1, 16), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            9 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16)],
            10 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16)],
            11 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
        ],
    }

    /// Batcher merge-exchange network for 18 elements, depth 13.
    pub struct Batcher18 {
        name: "batcher_18",
        algorithm: Batcher,
        size: 18,
        lanes: 18,
        stages: [
            0 => [(0, 16), (1, 17), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
            1 => [(0, 8), (1, 9), (2, 6), (3, 7), (10, 14), (11, 15)],
            2 => [(0, 4), (1, 5), (6, 10), (7, 11), (8, 16), (9, 17)],
            3 => [(0, 2), (1, 3), (4, 16), (5, 17), (8, 12), (9, 13)],
            4 => [(0, 1), (4, 8), (5, 9), (12, 16), (13, 17)],
            5 => [(2, 16), (3, 17), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            6 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17)],
            7 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17)],
            8 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
            9 => [(1, 16), (3, 10), (5, 12), (7, 14)],
            10 => [(1, 8), (3, 6), (7, 10), (9, 16), (11, 14)],
            11 => [(1, 4), (5, 8), (9, 12), (13, 16)],
            12 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
        ],
    }

    /// Batcher merge-exchange network for 19 elements, depth 14.
    pub struct Batcher19 {
        name: "batcher_19",
        algorithm: Batcher,
        size: 19,
        lanes: 19,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 7), (11, 15)],
            2 => [(0, 4), (1, 5), (2, 6), (7, 11), (8, 16), (9, 17), (10, 18)],
            3 => [(0, 2), (1, 3), (4, 16), (5, 17), (6, 18), (8, 12), (9, 13), (10, 14)],
            4 => [(0, 1), (4, 8), (5, 9), (6, 10), (12, 16), (13, 17), (14, 18)],
            5 => [(3, 17), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18)],
            6 => [(2, 16), (3, 9), (6, 12), (7, 13), (11, 17)],
            7 => [(2, 8), (3, 5), (7, 9), (10, 16), (11, 13), (15, 17)],
            8 => [(2, 4), (6, 8), (10, 12), (14, 16)],
            9 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
            10 => [(1, 16), (3, 18), (5, 12), (7, 14)],
            11 => [(1, 8), (3, 10), (9, 16), (11, 18)],
            12 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18)],
            13 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18)],
        ],
    }

    /// Batcher merge-exchange network for 20 elements, depth 14.
    pub struct Batcher20 {
        name: "batcher_20",
        algorithm: Batcher,
        size: 20,
        lanes: 20,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 12), (5, 13), (6, 14), (7, 15)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19)],
            3 => [(0, 2), (1, 3), (4, 16), (5, 17), (6, 18), (7, 19), (8, 12), (9, 13),
                (10, 14), (11, 15)],
            4 => [(0, 1), (4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18),
                (15, 19)],
            5 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
            6 => [(2, 16), (3, 17), (6, 12), (7, 13), (18, 19)],
            7 => [(2, 8), (3, 9), (10, 16), (11, 17)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17)],
            9 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
            10 => [(1, 16), (3, 18), (5, 12), (7, 14)],
            11 => [(1, 8), (3, 10), (9, 16), (11, 18)],
            12 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18)],
            13 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18)],
        ],
    }

    /// Batcher merge-exchange network for 21 elements, depth 15.
    pub struct Batcher21 {
        name: "batcher_21",
        algorithm: Batcher,
        size: 21,
        lanes: 21,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 13), (6, 14), (7, 15)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20)],
            3 => [(0, 2), (1, 3), (5, 17), (6, 18), (7, 19), (8, 12), (9, 13), (10, 14),
                (11, 15), (16, 20)],
            4 => [(0, 1), (4, 16), (5, 9), (6, 10), (7, 11), (13, 17), (14, 18), (15, 19)],
            5 => [(4, 8), (5, 7), (9, 11), (12, 16), (13, 15), (17, 19)],
            6 => [(3, 17), (4, 6), (7, 13), (8, 10), (12, 14), (16, 18)],
            7 => [(2, 16), (3, 9), (6, 20), (11, 17)],
            8 => [(2, 8), (3, 5), (6, 12), (7, 9), (10, 16), (11, 13), (14, 20), (15, 17)],
            9 => [(2, 4), (6, 8), (10, 12), (14, 16), (18, 20)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 14)],
            12 => [(1, 8), (3, 10), (5, 12), (9, 16), (11, 18), (13, 20)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20)],
        ],
    }

    /// Batcher merge-exchange network for 22 elements, depth 15.
    pub struct Batcher22 {
        name: "batcher_22",
        algorithm: Batcher,
        size: 22,
        lanes: 22,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 14), (7, 15)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21)],
            3 => [(0, 2), (1, 3), (6, 18), (7, 19), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 10), (7, 11), (14, 18), (15, 19)],
            5 => [(4, 8), (5, 9), (12, 16), (13, 17)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 14)],
            12 => [(1, 8), (3, 10), (5, 12), (9, 16), (11, 18), (13, 20)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20)],
        ],
    }

    /// Batcher merge-exchange network for 23 elements, depth 15.
    pub struct Batcher23 {
        name: "batcher_23",
        algorithm: Batcher,
        size: 23,
        lanes: 23,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 15)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21), (14, 22)],
            3 => [(0, 2), (1, 3), (7, 19), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20),
                (17, 21), (18, 22)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 18), (7, 11), (15, 19), (20, 22)],
            5 => [(4, 8), (5, 9), (6, 10), (12, 16), (13, 17), (14, 18)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 22)],
            12 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20), (19, 22)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22)],
        ],
    }

    /// Batcher merge-exchange network for 24 elements, depth 15.
    pub struct Batcher24 {
        name: "batcher_24",
        algorithm: Batcher,
        size: 24,
        lanes: 24,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21), (14, 22), (15, 23)],
            3 => [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
                (18, 22), (19, 23)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (20, 22), (21, 23)],
            5 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (22, 23)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 22)],
            12 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20), (19, 22)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22)],
        ],
    }

    /// Batcher merge-exchange network for 25 elements, depth 15.
    pub struct Batcher25 {
        name: "batcher_25",
        algorithm: Batcher,
        size: 25,
        lanes: 25,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23),
                (8, 24)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (16, 24)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21), (14, 22), (15, 23)],
            3 => [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
                (18, 22), (19, 23)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (21, 23)],
            5 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
                (20, 22)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21),
                (18, 24)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24)],
            12 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22),
                (17, 24)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20), (19, 22), (21, 24)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24)],
        ],
    }

    /// Batcher merge-exchange network for 26 elements, depth 15.
    pub struct Batcher26 {
        name: "batcher_26",
        algorithm: Batcher,
        size: 26,
        lanes: 26,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23),
                (8, 24), (9, 25)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21), (14, 22), (15, 23)],
            3 => [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
                (18, 22), (19, 23)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (13, 25)],
            5 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24), (21, 25)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
                (20, 22), (21, 23)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24), (11, 25)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21),
                (18, 24), (19, 25)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24)],
            12 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22),
                (17, 24)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20), (19, 22), (21, 24)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24)],
        ],
    }

    /// Batcher merge-exchange network for 27 elements, depth 15.
    pub struct Batcher27 {
        name: "batcher_27",
        algorithm: Batcher,
        size: 27,
        lanes: 27,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23),
                (8, 24), (9, 25), (10, 26)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21), (14, 22), (15, 23)],
            3 => [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
                (18, 22), (19, 23)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (13, 25), (14, 26)],
            5 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24), (21, 25), (22, 26)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
                (20, 22), (21, 23), (24, 26)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24), (11, 25)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21),
                (18, 24), (19, 25)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24), (11, 26)],
            12 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22),
                (17, 24), (19, 26)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20), (19, 22), (21, 24), (23, 26)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26)],
        ],
    }

    /// Batcher merge-exchange network for 30 elements, depth 15.
    pub struct Batcher30 {
        name: "batcher_30",
        algorithm: Batcher,
        size: 30,
        lanes: 30,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23),
                (8, 24), (9, 25), (10, 26), (11, 27), (12, 28), (13, 29)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21), (14, 22), (15, 23), (24, 28), (25, 29)],
            3 => [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
                (18, 22), (19, 23)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (13, 25), (14, 26),
                (15, 27)],
            5 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24), (21, 25), (22, 26), (23, 27)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
                (20, 22), (21, 23), (24, 26), (25, 27)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24), (11, 25), (14, 28), (15, 29)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21),
                (18, 24), (19, 25), (22, 28), (23, 29)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24), (11, 26), (13, 28)],
            12 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22),
                (17, 24), (19, 26), (21, 28)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20), (19, 22), (21, 24), (23, 26), (25, 28)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
        ],
    }

    /// Batcher merge-exchange network for 32 elements, depth 15.
    pub struct Batcher32 {
        name: "batcher_32",
        algorithm: Batcher,
        size: 32,
        lanes: 32,
        stages: [
            0 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23),
                (8, 24), (9, 25), (10, 26), (11, 27), (12, 28), (13, 29), (14, 30), (15, 31)],
            1 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31)],
            2 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19),
                (12, 20), (13, 21), (14, 22), (15, 23), (24, 28), (25, 29), (26, 30), (27, 31)],
            3 => [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21),
                (18, 22), (19, 23), (28, 30), (29, 31)],
            4 => [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (13, 25), (14, 26),
                (15, 27), (30, 31)],
            5 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24), (21, 25), (22, 26), (23, 27)],
            6 => [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19),
                (20, 22), (21, 23), (24, 26), (25, 27)],
            7 => [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24), (11, 25), (14, 28), (15, 29)],
            8 => [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21),
                (18, 24), (19, 25), (22, 28), (23, 29)],
            9 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29)],
            10 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29)],
            11 => [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24), (11, 26), (13, 28), (15, 30)],
            12 => [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22),
                (17, 24), (19, 26), (21, 28), (23, 30)],
            13 => [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18),
                (17, 20), (19, 22), (21, 24), (23, 26), (25, 28), (27, 30)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30)],
        ],
    }
}
