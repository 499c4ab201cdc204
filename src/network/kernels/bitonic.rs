//! Bitonic networks, trimmed to the requested size.

network! {
    /// Bitonic network for 4 elements, depth 3.
    pub struct Bitonic4 {
        name: "bitonic_4",
        algorithm: Bitonic,
        size: 4,
        lanes: 4,
        stages: [
            0 => [(0, 1), (2, 3)],
            1 => [(0, 3), (1, 2)],
            2 => [(0, 1), (2, 3)],
        ],
    }

    /// Bitonic network for 5 elements, depth 5.
    pub struct Bitonic5 {
        name: "bitonic_5",
        algorithm: Bitonic,
        size: 5,
        lanes: 5,
        stages: [
            0 => [(0, 1), (3, 4)],
            1 => [(2, 4)],
            2 => [(1, 4), (2, 3)],
            3 => [(0, 3), (1, 2)],
            4 => [(0, 1), (2, 3)],
        ],
    }

    /// Bitonic network for 6 elements, depth 6.
    pub struct Bitonic6 {
        name: "bitonic_6",
        algorithm: Bitonic,
        size: 6,
        lanes: 6,
        stages: [
            0 => [(1, 2), (4, 5)],
            1 => [(0, 1), (3, 5)],
            2 => [(1, 2), (3, 4)],
            3 => [(1, 5), (2, 4)],
            4 => [(0, 2), (1, 3), (4, 5)],
            5 => [(0, 1), (2, 3)],
        ],
    }

    /// Bitonic network for 7 elements, depth 6.
    pub struct Bitonic7 {
        name: "bitonic_7",
        algorithm: Bitonic,
        size: 7,
        lanes: 7,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6)],
            1 => [(0, 1), (3, 6), (4, 5)],
            2 => [(1, 2), (3, 4), (5, 6)],
            3 => [(0, 6), (1, 5), (2, 4)],
            4 => [(0, 2), (1, 3), (4, 6)],
            5 => [(0, 1), (2, 3), (4, 5)],
        ],
    }

    /// Bitonic network for 8 elements, depth 6.
    pub struct Bitonic8 {
        name: "bitonic_8",
        algorithm: Bitonic,
        size: 8,
        lanes: 8,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Bitonic network for 9 elements, depth 8.
    pub struct Bitonic9 {
        name: "bitonic_9",
        algorithm: Bitonic,
        size: 9,
        lanes: 9,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (7, 8)],
            1 => [(0, 3), (1, 2), (6, 8)],
            2 => [(0, 1), (2, 3), (5, 8), (6, 7)],
            3 => [(3, 8), (4, 7), (5, 6)],
            4 => [(4, 5), (6, 7)],
            5 => [(0, 7), (1, 6), (2, 5), (3, 4)],
            6 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            7 => [(0, 1), (2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Bitonic network for 10 elements, depth 9.
    pub struct Bitonic10 {
        name: "bitonic_10",
        algorithm: Bitonic,
        size: 10,
        lanes: 10,
        stages: [
            0 => [(0, 1), (3, 4), (5, 6), (8, 9)],
            1 => [(2, 3), (7, 9)],
            2 => [(0, 2), (3, 4), (6, 9), (7, 8)],
            3 => [(1, 3), (2, 4), (5, 8), (6, 7)],
            4 => [(1, 2), (3, 4), (5, 6), (7, 8)],
            5 => [(1, 7), (2, 6), (3, 9), (4, 8)],
            6 => [(0, 4), (3, 5), (8, 9)],
            7 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            8 => [(0, 1), (2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Bitonic network for 11 elements, depth 10.
    pub struct Bitonic11 {
        name: "bitonic_11",
        algorithm: Bitonic,
        size: 11,
        lanes: 11,
        stages: [
            0 => [(0, 1), (3, 4), (6, 7), (9, 10)],
            1 => [(2, 3), (5, 6), (8, 10)],
            2 => [(0, 2), (3, 4), (6, 7), (8, 9)],
            3 => [(1, 3), (2, 4), (6, 10), (7, 9)],
            4 => [(1, 2), (3, 4), (5, 7), (6, 8), (9, 10)],
            5 => [(2, 10), (3, 9), (5, 6), (7, 8)],
            6 => [(1, 7), (2, 6), (3, 5), (4, 8)],
            7 => [(0, 4), (1, 3), (5, 7), (8, 10)],
            8 => [(0, 2), (4, 6), (8, 9)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Bitonic network for 12 elements, depth 10.
    pub struct Bitonic12 {
        name: "bitonic_12",
        algorithm: Bitonic,
        size: 12,
        lanes: 12,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (10, 11)],
            1 => [(0, 2), (3, 4), (6, 7), (9, 11)],
            2 => [(0, 1), (4, 5), (7, 8), (9, 10)],
            3 => [(0, 4), (1, 3), (7, 11), (8, 10)],
            4 => [(0, 1), (2, 4), (3, 5), (6, 8), (7, 9), (10, 11)],
            5 => [(2, 3), (4, 5), (6, 7), (8, 9)],
            6 => [(2, 11), (3, 10), (4, 9), (5, 8)],
            7 => [(0, 4), (1, 5), (2, 7), (3, 6), (8, 10), (9, 11)],
            8 => [(0, 2), (1, 3), (4, 7), (5, 6), (8, 9), (10, 11)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Bitonic network for 13 elements, depth 10.
    pub struct Bitonic13 {
        name: "bitonic_13",
        algorithm: Bitonic,
        size: 13,
        lanes: 13,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (9, 10), (11, 12)],
            1 => [(0, 2), (3, 4), (6, 7), (9, 12), (10, 11)],
            2 => [(0, 1), (4, 5), (7, 8), (9, 10), (11, 12)],
            3 => [(0, 4), (1, 3), (6, 12), (7, 11), (8, 10)],
            4 => [(0, 1), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12)],
            5 => [(1, 12), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11)],
            6 => [(2, 11), (3, 10), (4, 9), (5, 8)],
            7 => [(0, 4), (1, 5), (2, 7), (3, 6), (8, 12), (9, 11)],
            8 => [(0, 2), (1, 3), (4, 7), (5, 6), (8, 10)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11)],
        ],
    }

    /// Bitonic network for 14 elements, depth 10.
    pub struct Bitonic14 {
        name: "bitonic_14",
        algorithm: Bitonic,
        size: 14,
        lanes: 14,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (8, 9), (10, 11), (12, 13)],
            1 => [(0, 2), (3, 6), (4, 5), (7, 8), (10, 13), (11, 12)],
            2 => [(0, 1), (3, 4), (5, 6), (8, 9), (10, 11), (12, 13)],
            3 => [(0, 5), (1, 4), (2, 3), (7, 13), (8, 12), (9, 11)],
            4 => [(0, 2), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13)],
            5 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
            6 => [(1, 13), (2, 12), (3, 11), (4, 10), (5, 9), (6, 8)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 13)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11)],
        ],
    }

    /// Bitonic network for 15 elements, depth 10.
    pub struct Bitonic15 {
        name: "bitonic_15",
        algorithm: Bitonic,
        size: 15,
        lanes: 15,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
            1 => [(0, 2), (3, 6), (4, 5), (7, 10), (8, 9), (11, 14), (12, 13)],
            2 => [(0, 1), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
            3 => [(0, 5), (1, 4), (2, 3), (7, 14), (8, 13), (9, 12), (10, 11)],
            4 => [(0, 2), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14)],
            5 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
            6 => [(0, 14), (1, 13), (2, 12), (3, 11), (4, 10), (5, 9), (6, 8)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
        ],
    }

    /// Bitonic network for 16 elements, depth 10.
    pub struct Bitonic16 {
        name: "bitonic_16",
        algorithm: Bitonic,
        size: 16,
        lanes: 16,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (12, 15), (13, 14)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (8, 15), (9, 14), (10, 13), (11, 12)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            6 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 17 elements, depth 12.
    pub struct Bitonic17 {
        name: "bitonic_17",
        algorithm: Bitonic,
        size: 17,
        lanes: 17,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (15, 16)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (14, 16)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (13, 16), (14, 15)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (11, 16), (12, 15), (13, 14)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (12, 13), (14, 15)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 15), (9, 14), (10, 13), (11, 12)],
            6 => [(7, 16), (8, 10), (9, 11), (12, 14), (13, 15)],
            7 => [(8, 9), (10, 11), (12, 13), (14, 15)],
            8 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8)],
            9 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15)],
            10 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            11 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 18 elements, depth 13.
    pub struct Bitonic18 {
        name: "bitonic_18",
        algorithm: Bitonic,
        size: 18,
        lanes: 18,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (7, 8), (9, 10), (11, 12), (13, 14), (16, 17)],
            1 => [(0, 3), (1, 2), (6, 7), (9, 12), (10, 11), (15, 17)],
            2 => [(0, 1), (2, 3), (4, 6), (7, 8), (9, 10), (11, 12), (14, 17), (15, 16)],
            3 => [(0, 4), (5, 7), (6, 8), (12, 17), (13, 16), (14, 15)],
            4 => [(5, 6), (7, 8), (13, 14), (15, 16)],
            5 => [(1, 7), (2, 6), (3, 5), (4, 8), (9, 16), (10, 15), (11, 14), (12, 13)],
            6 => [(1, 3), (2, 4), (5, 7), (6, 8), (9, 11), (10, 12), (13, 15), (14, 16)],
            7 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
            8 => [(1, 15), (2, 14), (3, 13), (4, 12), (5, 11), (6, 10), (7, 17), (8, 16)],
            9 => [(0, 8), (1, 5), (2, 6), (7, 9), (10, 14), (11, 15), (16, 17)],
            10 => [(0, 4), (3, 7), (8, 12), (9, 13)],
            11 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            12 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 19 elements, depth 14.
    pub struct Bitonic19 {
        name: "bitonic_19",
        algorithm: Bitonic,
        size: 19,
        lanes: 19,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (7, 8), (9, 10), (12, 13), (14, 15), (17, 18)],
            1 => [(0, 3), (1, 2), (6, 7), (11, 12), (16, 18)],
            2 => [(0, 1), (2, 3), (4, 6), (7, 8), (9, 11), (12, 13), (15, 18), (16, 17)],
            3 => [(0, 4), (5, 7), (6, 8), (10, 12), (11, 13), (14, 17), (15, 16)],
            4 => [(5, 6), (7, 8), (10, 11), (12, 13), (14, 15), (16, 17)],
            5 => [(1, 7), (2, 6), (3, 5), (4, 8), (10, 16), (11, 15), (12, 18), (13, 17)],
            6 => [(1, 3), (2, 4), (5, 7), (6, 8), (9, 13), (12, 14), (17, 18)],
            7 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 11), (10, 12), (13, 15), (14, 16)],
            8 => [(6, 18), (7, 17), (9, 10), (11, 12), (13, 14), (15, 16)],
            9 => [(1, 15), (2, 14), (3, 13), (4, 12), (5, 11), (6, 10), (7, 9), (8, 16)],
            10 => [(0, 8), (1, 5), (2, 6), (3, 7), (9, 13), (10, 14), (11, 15), (16, 18)],
            11 => [(0, 4), (1, 3), (5, 7), (8, 12), (9, 11), (13, 15), (16, 17)],
            12 => [(0, 2), (4, 6), (8, 10), (12, 14)],
            13 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 20 elements, depth 14.
    pub struct Bitonic20 {
        name: "bitonic_20",
        algorithm: Bitonic,
        size: 20,
        lanes: 20,
        stages: [
            0 => [(0, 1), (3, 4), (5, 6), (8, 9), (10, 11), (13, 14), (15, 16), (18, 19)],
            1 => [(2, 4), (7, 8), (12, 13), (17, 19)],
            2 => [(1, 4), (2, 3), (5, 7), (8, 9), (10, 12), (13, 14), (16, 19), (17, 18)],
            3 => [(0, 3), (1, 2), (6, 8), (7, 9), (11, 13), (12, 14), (15, 18), (16, 17)],
            4 => [(0, 1), (2, 3), (6, 7), (8, 9), (11, 12), (13, 14), (15, 16), (17, 18)],
            5 => [(0, 6), (1, 5), (2, 8), (3, 7), (11, 17), (12, 16), (13, 19), (14, 18)],
            6 => [(0, 1), (4, 6), (5, 9), (10, 14), (13, 15), (18, 19)],
            7 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17)],
            8 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
            9 => [(2, 15), (3, 14), (4, 13), (5, 12), (6, 19), (7, 18), (8, 17), (9, 16)],
            10 => [(0, 8), (1, 9), (6, 11), (7, 10), (16, 18), (17, 19)],
            11 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 13), (9, 12), (10, 14), (11, 15),
                (16, 17), (18, 19)],
            12 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 11), (9, 10), (12, 14), (13, 15)],
            13 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 21 elements, depth 15.
    pub struct Bitonic21 {
        name: "bitonic_21",
        algorithm: Bitonic,
        size: 21,
        lanes: 21,
        stages: [
            0 => [(0, 1), (3, 4), (5, 6), (8, 9), (10, 11), (13, 14), (16, 17), (19, 20)],
            1 => [(2, 4), (7, 8), (12, 13), (15, 16), (18, 20)],
            2 => [(1, 4), (2, 3), (5, 7), (8, 9), (10, 12), (13, 14), (16, 17), (18, 19)],
            3 => [(0, 3), (1, 2), (6, 8), (7, 9), (11, 13), (12, 14), (16, 20), (17, 19)],
            4 => [(0, 1), (2, 3), (6, 7), (8, 9), (11, 12), (13, 14), (15, 17), (16, 18),
                (19, 20)],
            5 => [(0, 6), (1, 5), (2, 8), (3, 7), (12, 20), (13, 19), (15, 16), (17, 18)],
            6 => [(0, 1), (4, 6), (5, 9), (11, 17), (12, 16), (13, 15), (14, 18)],
            7 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 14), (11, 13), (15, 17), (18, 20)],
            8 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 12), (14, 16), (18, 19)],
            9 => [(5, 20), (6, 19), (7, 18), (10, 11), (12, 13), (14, 15), (16, 17)],
            10 => [(2, 15), (3, 14), (4, 13), (5, 12), (6, 11), (7, 10), (8, 17), (9, 16)],
            11 => [(0, 8), (1, 9), (2, 6), (3, 7), (10, 14), (11, 15), (16, 20), (17, 19)],
            12 => [(0, 4), (1, 5), (8, 13), (9, 12), (16, 18)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 11), (9, 10), (12, 14), (13, 15),
                (16, 17), (18, 19)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 22 elements, depth 15.
    pub struct Bitonic22 {
        name: "bitonic_22",
        algorithm: Bitonic,
        size: 22,
        lanes: 22,
        stages: [
            0 => [(0, 1), (3, 4), (6, 7), (9, 10), (11, 12), (14, 15), (17, 18), (20, 21)],
            1 => [(2, 4), (5, 7), (8, 9), (13, 14), (16, 17), (19, 21)],
            2 => [(1, 4), (2, 3), (5, 6), (9, 10), (11, 13), (14, 15), (17, 18), (19, 20)],
            3 => [(0, 3), (1, 2), (5, 9), (6, 8), (12, 14), (13, 15), (17, 21), (18, 20)],
            4 => [(0, 1), (2, 3), (5, 6), (7, 9), (8, 10), (12, 13), (14, 15), (16, 18),
                (17, 19), (20, 21)],
            5 => [(1, 6), (2, 5), (7, 8), (9, 10), (13, 21), (14, 20), (16, 17), (18, 19)],
            6 => [(0, 7), (3, 8), (5, 9), (6, 10), (12, 18), (13, 17), (14, 16), (15, 19)],
            7 => [(0, 2), (3, 6), (4, 7), (8, 10), (11, 15), (12, 14), (16, 18), (19, 21)],
            8 => [(1, 2), (4, 5), (7, 9), (11, 13), (15, 17), (19, 20)],
            9 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18)],
            10 => [(3, 15), (4, 14), (5, 21), (6, 20), (7, 19), (8, 18), (9, 17), (10, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (5, 13), (6, 12), (7, 11), (16, 20), (17, 21)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 14), (9, 13), (10, 12), (11, 15),
                (16, 18), (17, 19), (20, 21)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 17), (18, 19)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 23 elements, depth 15.
    pub struct Bitonic23 {
        name: "bitonic_23",
        algorithm: Bitonic,
        size: 23,
        lanes: 23,
        stages: [
            0 => [(0, 1), (3, 4), (6, 7), (9, 10), (12, 13), (15, 16), (18, 19), (21, 22)],
            1 => [(2, 4), (5, 7), (8, 9), (11, 13), (14, 15), (17, 18), (20, 22)],
            2 => [(1, 4), (2, 3), (5, 6), (9, 10), (11, 12), (15, 16), (18, 19), (20, 21)],
            3 => [(0, 3), (1, 2), (5, 9), (6, 8), (11, 15), (12, 14), (18, 22), (19, 21)],
            4 => [(0, 1), (2, 3), (5, 6), (7, 9), (8, 10), (11, 12), (13, 15), (14, 16),
                (17, 19), (18, 20), (21, 22)],
            5 => [(1, 6), (2, 5), (7, 8), (9, 10), (13, 14), (15, 16), (17, 18), (19, 20)],
            6 => [(0, 7), (3, 8), (5, 9), (6, 10), (13, 22), (14, 21), (15, 20), (16, 19)],
            7 => [(0, 2), (3, 6), (4, 7), (8, 10), (11, 15), (12, 16), (13, 18), (14, 17),
                (19, 21), (20, 22)],
            8 => [(1, 2), (4, 5), (7, 9), (11, 13), (12, 14), (15, 18), (16, 17), (19, 20),
                (21, 22)],
            9 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18)],
            10 => [(3, 15), (4, 22), (5, 21), (6, 20), (7, 19), (8, 18), (9, 17), (10, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (4, 14), (5, 13), (6, 12), (7, 11), (16, 20),
                (17, 21), (18, 22)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 14), (9, 13), (10, 12), (11, 15),
                (16, 18), (17, 19), (20, 22)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 17), (18, 19), (20, 21)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 24 elements, depth 15.
    pub struct Bitonic24 {
        name: "bitonic_24",
        algorithm: Bitonic,
        size: 24,
        lanes: 24,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (10, 11), (13, 14), (16, 17), (19, 20), (22, 23)],
            1 => [(0, 1), (3, 5), (6, 8), (9, 10), (12, 14), (15, 16), (18, 19), (21, 23)],
            2 => [(1, 2), (3, 4), (6, 7), (10, 11), (12, 13), (16, 17), (19, 20), (21, 22)],
            3 => [(1, 5), (2, 4), (6, 10), (7, 9), (12, 16), (13, 15), (19, 23), (20, 22)],
            4 => [(0, 2), (1, 3), (4, 5), (6, 7), (8, 10), (9, 11), (12, 13), (14, 16),
                (15, 17), (18, 20), (19, 21), (22, 23)],
            5 => [(0, 1), (2, 3), (8, 9), (10, 11), (14, 15), (16, 17), (18, 19), (20, 21)],
            6 => [(0, 9), (1, 8), (2, 7), (3, 6), (14, 23), (15, 22), (16, 21), (17, 20)],
            7 => [(0, 2), (1, 3), (4, 9), (5, 8), (6, 10), (7, 11), (12, 16), (13, 17),
                (14, 19), (15, 18), (20, 22), (21, 23)],
            8 => [(0, 1), (2, 3), (4, 7), (5, 6), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 19), (17, 18), (20, 21), (22, 23)],
            9 => [(4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19)],
            10 => [(4, 23), (5, 22), (6, 21), (7, 20), (8, 19), (9, 18), (10, 17), (11, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 15), (5, 14), (6, 13), (7, 12),
                (16, 20), (17, 21), (18, 22), (19, 23)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 15), (9, 14), (10, 13), (11, 12),
                (16, 18), (17, 19), (20, 22), (21, 23)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 17), (18, 19), (20, 21), (22, 23)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Bitonic network for 25 elements, depth 15.
    pub struct Bitonic25 {
        name: "bitonic_25",
        algorithm: Bitonic,
        size: 25,
        lanes: 25,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (10, 11), (13, 14), (16, 17), (19, 20), (21, 22),
                (23, 24)],
            1 => [(0, 1), (3, 5), (6, 8), (9, 10), (12, 14), (15, 16), (18, 19), (21, 24),
                (22, 23)],
            2 => [(1, 2), (3, 4), (6, 7), (10, 11), (12, 13), (16, 17), (19, 20), (21, 22),
                (23, 24)],
            3 => [(1, 5), (2, 4), (6, 10), (7, 9), (12, 16), (13, 15), (18, 24), (19, 23),
                (20, 22)],
            4 => [(0, 2), (1, 3), (4, 5), (6, 7), (8, 10), (9, 11), (12, 13), (14, 16),
                (15, 17), (18, 20), (19, 21), (22, 24)],
            5 => [(0, 1), (2, 3), (8, 9), (10, 11), (13, 24), (14, 15), (16, 17), (18, 19),
                (20, 21), (22, 23)],
            6 => [(0, 9), (1, 8), (2, 7), (3, 6), (14, 23), (15, 22), (16, 21), (17, 20)],
            7 => [(0, 2), (1, 3), (4, 9), (5, 8), (6, 10), (7, 11), (12, 16), (13, 17),
                (14, 19), (15, 18), (20, 24), (21, 23)],
            8 => [(0, 1), (2, 3), (4, 7), (5, 6), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 19), (17, 18), (20, 22)],
            9 => [(3, 24), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23)],
            10 => [(4, 23), (5, 22), (6, 21), (7, 20), (8, 19), (9, 18), (10, 17), (11, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 15), (5, 14), (6, 13), (7, 12),
                (16, 24), (17, 21), (18, 22), (19, 23)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 15), (9, 14), (10, 13), (11, 12),
                (16, 20), (17, 19), (21, 23)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (20, 22)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23)],
        ],
    }

    /// Bitonic network for 26 elements, depth 15.
    pub struct Bitonic26 {
        name: "bitonic_26",
        algorithm: Bitonic,
        size: 26,
        lanes: 26,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (9, 10), (11, 12), (14, 15), (17, 18), (20, 21),
                (22, 23), (24, 25)],
            1 => [(0, 1), (3, 5), (6, 8), (9, 12), (10, 11), (13, 15), (16, 17), (19, 20),
                (22, 25), (23, 24)],
            2 => [(1, 2), (3, 4), (6, 7), (9, 10), (11, 12), (13, 14), (17, 18), (20, 21),
                (22, 23), (24, 25)],
            3 => [(1, 5), (2, 4), (6, 11), (7, 10), (8, 9), (13, 17), (14, 16), (19, 25),
                (20, 24), (21, 23)],
            4 => [(0, 2), (1, 3), (4, 5), (6, 8), (9, 11), (10, 12), (13, 14), (15, 17),
                (16, 18), (19, 21), (20, 22), (23, 25)],
            5 => [(0, 1), (2, 3), (4, 6), (7, 8), (9, 10), (11, 12), (14, 25), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24)],
            6 => [(0, 10), (1, 9), (2, 8), (3, 7), (15, 24), (16, 23), (17, 22), (18, 21)],
            7 => [(0, 4), (1, 3), (5, 9), (6, 10), (7, 11), (8, 12), (13, 17), (14, 18),
                (15, 20), (16, 19), (21, 25), (22, 24)],
            8 => [(2, 4), (5, 7), (6, 8), (9, 11), (10, 12), (13, 15), (14, 16), (17, 20),
                (18, 19), (21, 23)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24)],
            10 => [(3, 25), (4, 24), (5, 23), (6, 22), (7, 21), (8, 20), (9, 19), (10, 18),
                (11, 17), (12, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 15), (6, 14), (7, 13),
                (16, 24), (17, 25), (18, 22), (19, 23)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 15), (10, 14), (11, 13),
                (16, 20), (17, 21), (24, 25)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23)],
        ],
    }

    /// Bitonic network for 27 elements, depth 15.
    pub struct Bitonic27 {
        name: "bitonic_27",
        algorithm: Bitonic,
        size: 27,
        lanes: 27,
        stages: [
            0 => [(1, 2), (4, 5), (7, 8), (9, 10), (11, 12), (14, 15), (16, 17), (18, 19),
                (21, 22), (23, 24), (25, 26)],
            1 => [(0, 1), (3, 5), (6, 8), (9, 12), (10, 11), (13, 15), (16, 19), (17, 18),
                (20, 21), (23, 26), (24, 25)],
            2 => [(1, 2), (3, 4), (6, 7), (9, 10), (11, 12), (13, 14), (16, 17), (18, 19),
                (21, 22), (23, 24), (25, 26)],
            3 => [(1, 5), (2, 4), (6, 11), (7, 10), (8, 9), (13, 18), (14, 17), (15, 16),
                (20, 26), (21, 25), (22, 24)],
            4 => [(0, 2), (1, 3), (4, 5), (6, 8), (9, 11), (10, 12), (13, 15), (16, 18),
                (17, 19), (20, 22), (21, 23), (24, 26)],
            5 => [(0, 1), (2, 3), (4, 6), (7, 8), (9, 10), (11, 12), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25)],
            6 => [(0, 10), (1, 9), (2, 8), (3, 7), (14, 26), (15, 25), (16, 24), (17, 23),
                (18, 22), (19, 21)],
            7 => [(0, 4), (1, 3), (5, 9), (6, 10), (7, 11), (8, 12), (13, 17), (14, 18),
                (15, 19), (16, 20), (21, 25), (22, 26)],
            8 => [(2, 4), (5, 7), (6, 8), (9, 11), (10, 12), (13, 15), (14, 16), (17, 19),
                (18, 20), (21, 23), (22, 24), (25, 26)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24)],
            10 => [(2, 26), (3, 25), (4, 24), (5, 23), (6, 22), (7, 21), (8, 20), (9, 19),
                (10, 18), (11, 17), (12, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 15), (6, 14), (7, 13),
                (16, 24), (17, 25), (18, 26), (19, 23)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 15), (10, 14), (11, 13),
                (16, 20), (17, 21), (18, 22), (24, 26)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 25)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23)],
        ],
    }

    /// Bitonic network for 28 elements, depth 15.
    pub struct Bitonic28 {
        name: "bitonic_28",
        algorithm: Bitonic,
        size: 28,
        lanes: 28,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (8, 9), (10, 11), (12, 13), (15, 16), (17, 18),
                (19, 20), (22, 23), (24, 25), (26, 27)],
            1 => [(0, 1), (3, 6), (4, 5), (7, 9), (10, 13), (11, 12), (14, 16), (17, 20),
                (18, 19), (21, 22), (24, 27), (25, 26)],
            2 => [(1, 2), (3, 4), (5, 6), (7, 8), (10, 11), (12, 13), (14, 15), (17, 18),
                (19, 20), (22, 23), (24, 25), (26, 27)],
            3 => [(0, 6), (1, 5), (2, 4), (7, 12), (8, 11), (9, 10), (14, 19), (15, 18),
                (16, 17), (21, 27), (22, 26), (23, 25)],
            4 => [(0, 2), (1, 3), (4, 6), (7, 9), (10, 12), (11, 13), (14, 16), (17, 19),
                (18, 20), (21, 23), (22, 24), (25, 27)],
            5 => [(0, 1), (2, 3), (4, 5), (8, 9), (10, 11), (12, 13), (15, 16), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26)],
            6 => [(0, 12), (1, 11), (2, 10), (3, 9), (4, 8), (5, 7), (15, 27), (16, 26),
                (17, 25), (18, 24), (19, 23), (20, 22)],
            7 => [(0, 4), (1, 5), (6, 10), (7, 11), (8, 12), (9, 13), (14, 18), (15, 19),
                (16, 20), (17, 21), (22, 26), (23, 27)],
            8 => [(0, 1), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16),
                (15, 17), (18, 20), (19, 21), (22, 24), (23, 25), (26, 27)],
            9 => [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25)],
            10 => [(2, 27), (3, 26), (4, 25), (5, 24), (6, 23), (7, 22), (8, 21), (9, 20),
                (10, 19), (11, 18), (12, 17), (13, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 15), (7, 14),
                (16, 24), (17, 25), (18, 26), (19, 27)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 15), (11, 14),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 26), (25, 27)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 15), (13, 14),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 25), (26, 27)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23)],
        ],
    }

    /// Bitonic network for 29 elements, depth 15.
    pub struct Bitonic29 {
        name: "bitonic_29",
        algorithm: Bitonic,
        size: 29,
        lanes: 29,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (8, 9), (10, 11), (12, 13), (15, 16), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
            1 => [(0, 1), (3, 6), (4, 5), (7, 9), (10, 13), (11, 12), (14, 16), (17, 20),
                (18, 19), (21, 24), (22, 23), (25, 28), (26, 27)],
            2 => [(1, 2), (3, 4), (5, 6), (7, 8), (10, 11), (12, 13), (14, 15), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
            3 => [(0, 6), (1, 5), (2, 4), (7, 12), (8, 11), (9, 10), (14, 19), (15, 18),
                (16, 17), (21, 28), (22, 27), (23, 26), (24, 25)],
            4 => [(0, 2), (1, 3), (4, 6), (7, 9), (10, 12), (11, 13), (14, 16), (17, 19),
                (18, 20), (21, 23), (22, 24), (25, 27), (26, 28)],
            5 => [(0, 1), (2, 3), (4, 5), (8, 9), (10, 11), (12, 13), (15, 16), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
            6 => [(0, 12), (1, 11), (2, 10), (3, 9), (4, 8), (5, 7), (14, 28), (15, 27),
                (16, 26), (17, 25), (18, 24), (19, 23), (20, 22)],
            7 => [(0, 4), (1, 5), (6, 10), (7, 11), (8, 12), (9, 13), (14, 18), (15, 19),
                (16, 20), (17, 21), (22, 26), (23, 27), (24, 28)],
            8 => [(0, 1), (2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16),
                (15, 17), (18, 20), (19, 21), (22, 24), (23, 25), (26, 28)],
            9 => [(1, 28), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27)],
            10 => [(2, 27), (3, 26), (4, 25), (5, 24), (6, 23), (7, 22), (8, 21), (9, 20),
                (10, 19), (11, 18), (12, 17), (13, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 15), (7, 14),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 15), (11, 14),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 27)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 15), (13, 14),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27)],
        ],
    }

    /// Bitonic network for 30 elements, depth 15.
    pub struct Bitonic30 {
        name: "bitonic_30",
        algorithm: Bitonic,
        size: 30,
        lanes: 30,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29)],
            1 => [(0, 1), (3, 6), (4, 5), (7, 10), (8, 9), (11, 14), (12, 13), (15, 17),
                (18, 21), (19, 20), (22, 25), (23, 24), (26, 29), (27, 28)],
            2 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29)],
            3 => [(0, 6), (1, 5), (2, 4), (7, 14), (8, 13), (9, 12), (10, 11), (15, 20),
                (16, 19), (17, 18), (22, 29), (23, 28), (24, 27), (25, 26)],
            4 => [(0, 2), (1, 3), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29)],
            5 => [(0, 1), (2, 3), (4, 5), (7, 8), (9, 10), (11, 12), (13, 14), (16, 17),
                (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29)],
            6 => [(0, 13), (1, 12), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7), (15, 29),
                (16, 28), (17, 27), (18, 26), (19, 25), (20, 24), (21, 23)],
            7 => [(0, 4), (1, 5), (2, 6), (7, 11), (8, 12), (9, 13), (10, 14), (15, 19),
                (16, 20), (17, 21), (18, 22), (23, 27), (24, 28), (25, 29)],
            8 => [(0, 2), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14), (15, 17),
                (16, 18), (19, 21), (20, 22), (23, 25), (24, 26), (27, 29)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
            10 => [(1, 29), (2, 28), (3, 27), (4, 26), (5, 25), (6, 24), (7, 23), (8, 22),
                (9, 21), (10, 20), (11, 19), (12, 18), (13, 17), (14, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 29)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27)],
        ],
    }

    /// Bitonic network for 31 elements, depth 15.
    pub struct Bitonic31 {
        name: "bitonic_31",
        algorithm: Bitonic,
        size: 31,
        lanes: 31,
        stages: [
            0 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30)],
            1 => [(0, 1), (3, 6), (4, 5), (7, 10), (8, 9), (11, 14), (12, 13), (15, 18),
                (16, 17), (19, 22), (20, 21), (23, 26), (24, 25), (27, 30), (28, 29)],
            2 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30)],
            3 => [(0, 6), (1, 5), (2, 4), (7, 14), (8, 13), (9, 12), (10, 11), (15, 22),
                (16, 21), (17, 20), (18, 19), (23, 30), (24, 29), (25, 28), (26, 27)],
            4 => [(0, 2), (1, 3), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14), (15, 17),
                (16, 18), (19, 21), (20, 22), (23, 25), (24, 26), (27, 29), (28, 30)],
            5 => [(0, 1), (2, 3), (4, 5), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30)],
            6 => [(0, 13), (1, 12), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7), (15, 30),
                (16, 29), (17, 28), (18, 27), (19, 26), (20, 25), (21, 24), (22, 23)],
            7 => [(0, 4), (1, 5), (2, 6), (7, 11), (8, 12), (9, 13), (10, 14), (15, 19),
                (16, 20), (17, 21), (18, 22), (23, 27), (24, 28), (25, 29), (26, 30)],
            8 => [(0, 2), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14), (15, 17),
                (16, 18), (19, 21), (20, 22), (23, 25), (24, 26), (27, 29), (28, 30)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30)],
            10 => [(0, 30), (1, 29), (2, 28), (3, 27), (4, 26), (5, 25), (6, 24), (7, 23),
                (8, 22), (9, 21), (10, 20), (11, 19), (12, 18), (13, 17), (14, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29)],
        ],
    }

    /// Bitonic network for 32 elements, depth 15.
    pub struct Bitonic32 {
        name: "bitonic_32",
        algorithm: Bitonic,
        size: 32,
        lanes: 32,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (12, 15), (13, 14),
                (16, 19), (17, 18), (20, 23), (21, 22), (24, 27), (25, 26), (28, 31), (29, 30)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (8, 15), (9, 14), (10, 13), (11, 12),
                (16, 23), (17, 22), (18, 21), (19, 20), (24, 31), (25, 30), (26, 29), (27, 28)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            6 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8),
                (16, 31), (17, 30), (18, 29), (19, 28), (20, 27), (21, 26), (22, 25), (23, 24)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            10 => [(0, 31), (1, 30), (2, 29), (3, 28), (4, 27), (5, 26), (6, 25), (7, 24),
                (8, 23), (9, 22), (10, 21), (11, 20), (12, 19), (13, 18), (14, 17), (15, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
        ],
    }

    /// Bitonic network for 64 elements, depth 21.
    pub struct Bitonic64 {
        name: "bitonic_64",
        algorithm: Bitonic,
        size: 64,
        lanes: 64,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (12, 15), (13, 14),
                (16, 19), (17, 18), (20, 23), (21, 22), (24, 27), (25, 26), (28, 31), (29, 30),
                (32, 35), (33, 34), (36, 39), (37, 38), (40, 43), (41, 42), (44, 47), (45, 46),
                (48, 51), (49, 50), (52, 55), (53, 54), (56, 59), (57, 58), (60, 63), (61, 62)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (8, 15), (9, 14), (10, 13), (11, 12),
                (16, 23), (17, 22), (18, 21), (19, 20), (24, 31), (25, 30), (26, 29), (27, 28),
                (32, 39), (33, 38), (34, 37), (35, 36), (40, 47), (41, 46), (42, 45), (43, 44),
                (48, 55), (49, 54), (50, 53), (51, 52), (56, 63), (57, 62), (58, 61), (59, 60)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            6 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8),
                (16, 31), (17, 30), (18, 29), (19, 28), (20, 27), (21, 26), (22, 25), (23, 24),
                (32, 47), (33, 46), (34, 45), (35, 44), (36, 43), (37, 42), (38, 41), (39, 40),
                (48, 63), (49, 62), (50, 61), (51, 60), (52, 59), (53, 58), (54, 57), (55, 56)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31),
                (32, 36), (33, 37), (34, 38), (35, 39), (40, 44), (41, 45), (42, 46), (43, 47),
                (48, 52), (49, 53), (50, 54), (51, 55), (56, 60), (57, 61), (58, 62), (59, 63)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            10 => [(0, 31), (1, 30), (2, 29), (3, 28), (4, 27), (5, 26), (6, 25), (7, 24),
                (8, 23), (9, 22), (10, 21), (11, 20), (12, 19), (13, 18), (14, 17), (15, 16),
                (32, 63), (33, 62), (34, 61), (35, 60), (36, 59), (37, 58), (38, 57), (39, 56),
                (40, 55), (41, 54), (42, 53), (43, 52), (44, 51), (45, 50), (46, 49), (47, 48)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31),
                (32, 40), (33, 41), (34, 42), (35, 43), (36, 44), (37, 45), (38, 46), (39, 47),
                (48, 56), (49, 57), (50, 58), (51, 59), (52, 60), (53, 61), (54, 62), (55, 63)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31),
                (32, 36), (33, 37), (34, 38), (35, 39), (40, 44), (41, 45), (42, 46), (43, 47),
                (48, 52), (49, 53), (50, 54), (51, 55), (56, 60), (57, 61), (58, 62), (59, 63)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            15 => [(0, 63), (1, 62), (2, 61), (3, 60), (4, 59), (5, 58), (6, 57), (7, 56),
                (8, 55), (9, 54), (10, 53), (11, 52), (12, 51), (13, 50), (14, 49), (15, 48),
                (16, 47), (17, 46), (18, 45), (19, 44), (20, 43), (21, 42), (22, 41), (23, 40),
                (24, 39), (25, 38), (26, 37), (27, 36), (28, 35), (29, 34), (30, 33), (31, 32)],
            16 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23),
                (8, 24), (9, 25), (10, 26), (11, 27), (12, 28), (13, 29), (14, 30), (15, 31),
                (32, 48), (33, 49), (34, 50), (35, 51), (36, 52), (37, 53), (38, 54), (39, 55),
                (40, 56), (41, 57), (42, 58), (43, 59), (44, 60), (45, 61), (46, 62), (47, 63)],
            17 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31),
                (32, 40), (33, 41), (34, 42), (35, 43), (36, 44), (37, 45), (38, 46), (39, 47),
                (48, 56), (49, 57), (50, 58), (51, 59), (52, 60), (53, 61), (54, 62), (55, 63)],
            18 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31),
                (32, 36), (33, 37), (34, 38), (35, 39), (40, 44), (41, 45), (42, 46), (43, 47),
                (48, 52), (49, 53), (50, 54), (51, 55), (56, 60), (57, 61), (58, 62), (59, 63)],
            19 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            20 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
        ],
    }
}
