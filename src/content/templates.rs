//! Fixed content templates
//!
//! One formatting function per content archetype. Each takes the title and
//! topic and returns the filled-in skeleton; none of them keep state.

/// Signature shared by every template.
pub type TemplateFn = fn(&str, &str) -> String;

/// Hashtag form of a topic: every whitespace character removed.
///
/// Whitespace follows the ECMAScript `\s` class that browser clients use,
/// so U+FEFF is stripped and U+0085 is kept.
pub fn hashtag(topic: &str) -> String {
    topic.chars().filter(|c| !is_js_whitespace(*c)).collect()
}

fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Long-form article skeleton.
pub fn blog(title: &str, topic: &str) -> String {
    format!(
        "# {title}

## Introduction
Start with a compelling hook that draws readers into the topic. Explain why this topic matters and what readers will learn.

## What is {topic}?
Define the key concepts and provide context for understanding this subject.

## Key Benefits
- Benefit 1: Explain the first major advantage
- Benefit 2: Discuss the second important benefit
- Benefit 3: Cover the third significant point

## How It Works
Break down the process step by step with clear examples and explanations.

## Real-World Examples
Share practical examples and case studies that demonstrate the value.

## Common Mistakes
Highlight what to avoid when working with this topic.

## Best Practices
Provide actionable tips for success.

## Conclusion
Summarize the key points and reinforce the main message.

## Call to Action
Encourage readers to take the next step, whether it's subscribing, trying a tool, or learning more."
    )
}

/// Short promotional post ending in a hashtag line.
pub fn social(title: &str, topic: &str) -> String {
    let tag = hashtag(topic);
    format!(
        "{title}

Discover the power of {topic}. Whether you're just starting out or looking to level up, this is something you need to know about.

✓ Easy to implement
✓ Proven results
✓ Worth your time

Learn more about how {topic} can transform your approach.

#{tag} #Content #Tips #Growth #Success"
    )
}

pub fn email(title: &str, topic: &str) -> String {
    format!(
        "Subject: Transform Your {topic} Strategy Today

---

Hi there,

I wanted to share something valuable with you: {title}.

In today's competitive landscape, understanding {topic} can make all the difference. Here's what you need to know:

✓ Why {topic} matters now more than ever
✓ How successful people leverage this
✓ Quick actionable steps to get started
✓ Common pitfalls to avoid

The best time to start was yesterday. The second best time is right now.

Ready to dive deeper? Click below to explore our complete guide.

[Click Here to Learn More]

Best regards,
Your Content Team

P.S. This is something your competitors already know about. Don't fall behind."
    )
}

pub fn marketing(title: &str, topic: &str) -> String {
    format!(
        "Discover: {title}

Transform Your {topic} Game

Why settle for ordinary when you can be extraordinary?

Our solution brings:
✓ Proven results in {topic}
✓ Easy implementation
✓ Measurable impact
✓ Professional support
✓ 100% satisfaction guarantee

What Makes Us Different:
- Deep expertise in {topic}
- Customer-first approach
- Continuous innovation
- Real results

Join thousands who've already transformed their {topic} strategy.

[Get Started Today - Risk Free]

Limited time offer: Get started today and receive a free consultation."
    )
}

/// Numbered how-to with prerequisites, tips and a short FAQ.
pub fn guide(title: &str, topic: &str) -> String {
    format!(
        "# {title}

## Getting Started

### What You'll Need
- Basic understanding of {topic}
- Willingness to follow steps
- 15-30 minutes of your time

## Step-by-Step Instructions

### Step 1: Understand the Fundamentals
Begin by grasping the core concepts of {topic}. This foundation is crucial for success.

### Step 2: Gather Your Resources
Collect everything you need to implement this guide effectively.

### Step 3: Create Your Plan
Outline your specific approach to {topic}.

### Step 4: Take Action
Start implementing what you've learned. Small steps lead to big results.

### Step 5: Review and Optimize
Assess your progress and fine-tune your approach.

## Pro Tips
- Tip 1: Share your progress with others
- Tip 2: Stay consistent with your efforts
- Tip 3: Adapt based on results

## Common Questions

Q: How long will this take?
A: Results vary, but most people see progress within days.

Q: What if I struggle?
A: That's normal. Go back to the fundamentals and try again.

## Next Steps
Now that you understand {topic}, consider exploring advanced strategies to accelerate your results."
    )
}

/// Video script with elapsed-time markers. Ends with a newline.
pub fn script(title: &str, topic: &str) -> String {
    format!(
        "# Video Script: {title}

[OPENING - 0:00]
Hello and welcome back to the channel! Today we're diving into something really important: {title}. If you've been curious about {topic}, this video is for you.

[HOOK - 0:15]
Here's the thing about {topic}: most people don't understand it correctly, and that's costing them. By the end of this video, you'll know exactly what to do.

[MAIN CONTENT - 1:00]
Let me break this down into three key points:

First, the basics of {topic}
Second, why it matters for you
Third, exactly how to get started

[POINT 1 - 1:30]
When it comes to {topic}...

[POINT 2 - 3:00]
Here's why this is important...

[POINT 3 - 4:30]
Ready to actually start? Here's your action plan...

[CLOSING - 6:00]
That's it! You now have everything you need to master {topic}. If you found this helpful, smash that like button and subscribe for more content just like this.

[CALL TO ACTION - 6:30]
Check the description for resources and links. See you in the next one!
"
    )
}
