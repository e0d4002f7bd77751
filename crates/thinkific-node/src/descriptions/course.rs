// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Course resource property tables

use super::{collection, child_string, limit, required_string, return_all, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

pub static OPERATIONS: &[Property] = &[Property {
    name: "operation",
    display_name: "Operation",
    kind: PropertyKind::Options,
    default: Some("\"getAll\""),
    options: &[
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get a course by ID"),
            action: Some("Get a course"),
        },
        PropertyOption {
            name: "Get Chapters",
            value: "getChapters",
            description: Some("Get all chapters in a course"),
            action: Some("Get course chapters"),
        },
        PropertyOption {
            name: "Get Contents",
            value: "getContents",
            description: Some("Get all content in a course"),
            action: Some("Get course contents"),
        },
        PropertyOption {
            name: "Get Lessons",
            value: "getLessons",
            description: Some("Get all lessons in a chapter"),
            action: Some("Get chapter lessons"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many courses"),
            action: Some("Get many courses"),
        },
    ],
    display: Some(show(&["course"], &[])),
    ..Property::DEFAULT
}];

static GET_ALL_FILTERS: &[Property] = &[child_string(
    "instructor_id",
    "Instructor ID",
    "Filter courses by instructor ID",
)];

pub static FIELDS: &[Property] = &[
    // course:get
    required_string(
        "courseId",
        "Course ID",
        "The ID of the course to retrieve",
        show(&["course"], &["get"]),
    ),
    // course:getChapters
    required_string(
        "courseId",
        "Course ID",
        "The ID of the course to get chapters for",
        show(&["course"], &["getChapters"]),
    ),
    return_all(show(&["course"], &["getChapters"])),
    limit(&["course"], &["getChapters"]),
    // course:getContents
    required_string(
        "courseId",
        "Course ID",
        "The ID of the course to get contents for",
        show(&["course"], &["getContents"]),
    ),
    return_all(show(&["course"], &["getContents"])),
    limit(&["course"], &["getContents"]),
    // course:getLessons
    required_string(
        "chapterId",
        "Chapter ID",
        "The ID of the chapter to get lessons for",
        show(&["course"], &["getLessons"]),
    ),
    return_all(show(&["course"], &["getLessons"])),
    limit(&["course"], &["getLessons"]),
    // course:getAll
    return_all(show(&["course"], &["getAll"])),
    limit(&["course"], &["getAll"]),
    collection(
        "filters",
        "Filters",
        "Add Filter",
        GET_ALL_FILTERS,
        show(&["course"], &["getAll"]),
    ),
];
